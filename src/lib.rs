//! Module Registry Domain Model
//!
//! Typed records for a cross-domain module registry:
//! - Closed classifications for functional role ([`ModuleType`]) and
//!   subject-matter context ([`Domain`])
//! - The [`Module`] record holding identity, classification and
//!   free-form capability data
//! - A validation seam run at construction, currently rule-free
//!
//! Records are plain values: cloneable, comparable field by field, and
//! serializable with snake_case wire names.

pub mod domain;

pub use domain::{validate_module, Domain, Module, ModuleId, ModuleType, ModuleValidationError};
