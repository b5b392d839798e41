//! Domain layer - Core registry entities

pub mod module;

pub use module::{validate_module, Domain, Module, ModuleId, ModuleType, ModuleValidationError};
