//! Module domain - identity, classification and declared capabilities

mod entity;
mod validation;

pub use entity::{Domain, Module, ModuleId, ModuleType};
pub use validation::{validate_module, ModuleValidationError};
