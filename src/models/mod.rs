// Data models for validation-mapper

pub mod error_map;
pub mod validation;

pub use error_map::ErrorMap;
pub use validation::{ValidationFailure, ValidationResult};
