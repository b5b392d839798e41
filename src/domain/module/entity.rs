//! Module entity and classification types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::validate_module;
use super::ModuleValidationError;

/// Functional role a module plays in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    DataProcessor,
    MlModel,
    ApiConnector,
    StorageHandler,
    Validator,
    Transformer,
    Aggregator,
}

impl ModuleType {
    /// Get the snake_case tag used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataProcessor => "data_processor",
            Self::MlModel => "ml_model",
            Self::ApiConnector => "api_connector",
            Self::StorageHandler => "storage_handler",
            Self::Validator => "validator",
            Self::Transformer => "transformer",
            Self::Aggregator => "aggregator",
        }
    }
}

impl std::fmt::Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Subject-matter context a module operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    DataScience,
    CloudComputing,
    Finance,
    Healthcare,
    Iot,
    Security,
    Automation,
}

impl Domain {
    /// Get the snake_case tag used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataScience => "data_science",
            Self::CloudComputing => "cloud_computing",
            Self::Finance => "finance",
            Self::Healthcare => "healthcare",
            Self::Iot => "iot",
            Self::Security => "security",
            Self::Automation => "automation",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Module identifier.
///
/// Intended to be unique per registry, but uniqueness is owned by whatever
/// collection eventually holds the records, not by the identifier itself.
/// No format rules are imposed on the inner string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Create a new ModuleId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for ModuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Module entity representing one registrable unit of functionality.
///
/// A plain value type: immutable after construction apart from the
/// builder-style `with_*` methods, with no ownership relationships to
/// other entities. Equality is derived, field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Unique identifier for this module
    module_id: ModuleId,

    /// Functional role
    module_type: ModuleType,

    /// Subject-matter context
    domain: Domain,

    /// Declared capabilities, free-form
    capabilities: HashMap<String, serde_json::Value>,

    /// Free-form descriptive data
    #[serde(default)]
    metadata: HashMap<String, serde_json::Value>,

    /// Observed performance figures, unconstrained units
    #[serde(default)]
    performance_metrics: HashMap<String, f64>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl Module {
    /// Create a new Module with required fields.
    ///
    /// `metadata` and `performance_metrics` start empty and `created_at`
    /// is stamped with the current UTC time. The validation hook runs
    /// immediately after the record is assembled.
    pub fn new(
        module_id: impl Into<ModuleId>,
        module_type: ModuleType,
        domain: Domain,
        capabilities: HashMap<String, serde_json::Value>,
    ) -> Self {
        let module = Self {
            module_id: module_id.into(),
            module_type,
            domain,
            capabilities,
            metadata: HashMap::new(),
            performance_metrics: HashMap::new(),
            created_at: Utc::now(),
        };
        if let Err(err) = module.validate() {
            match err {}
        }
        module
    }

    /// Builder-style method to set metadata
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Builder-style method to set performance metrics
    pub fn with_performance_metrics(mut self, metrics: HashMap<String, f64>) -> Self {
        self.performance_metrics = metrics;
        self
    }

    /// Builder-style method to override the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Add a single capability entry
    pub fn with_capability(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.capabilities.insert(key.into(), value.into());
        self
    }

    /// Add a single performance metric
    pub fn with_metric(mut self, key: impl Into<String>, value: f64) -> Self {
        self.performance_metrics.insert(key.into(), value);
        self
    }

    /// Validation hook run after construction.
    ///
    /// No rules are defined yet: `ModuleValidationError` has no variants,
    /// so this cannot currently fail. It exists so future rules have a
    /// single place to attach.
    pub fn validate(&self) -> Result<(), ModuleValidationError> {
        validate_module(self)
    }

    // Getters

    pub fn module_id(&self) -> &ModuleId {
        &self.module_id
    }

    pub fn module_type(&self) -> ModuleType {
        self.module_type
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn capabilities(&self) -> &HashMap<String, serde_json::Value> {
        &self.capabilities
    }

    pub fn metadata(&self) -> &HashMap<String, serde_json::Value> {
        &self.metadata
    }

    pub fn performance_metrics(&self) -> &HashMap<String, f64> {
        &self.performance_metrics
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
