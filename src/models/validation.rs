// Validation engine output models
// These types are produced by a validation backend; this crate only reads them.

use serde::{Deserialize, Serialize};

/// A single reported problem with one field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Name of the field that failed validation
    pub field_name: String,

    /// Human-readable explanation of the failure
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// Outcome of running a validator over an entity.
///
/// An empty failure list means the entity passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Failures explaining why validation did not pass
    pub failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// Construct a result for an entity with no failures.
    pub fn success() -> Self {
        Self::default()
    }

    /// Construct a result carrying one or more failures.
    pub fn failure(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}
