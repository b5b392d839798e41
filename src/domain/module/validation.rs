//! Module validation seam
//!
//! No validation rules are defined for module records yet: identifiers
//! carry no format constraints, capability and metadata maps are
//! schema-free, and metric values have no declared ranges. The seam is
//! kept so rules added later slot in without changing the construction
//! path.

use std::fmt;

use super::Module;

/// Module validation errors.
///
/// Deliberately uninhabited: with no rules in force, validation cannot
/// fail, and the type system records that. Adding the first rule means
/// adding the first variant here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModuleValidationError {}

impl fmt::Display for ModuleValidationError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for ModuleValidationError {}

/// Validate a complete Module. Currently always succeeds.
pub fn validate_module(_module: &Module) -> Result<(), ModuleValidationError> {
    Ok(())
}
