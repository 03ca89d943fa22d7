// Library exports for validation-mapper
// This file exposes modules and functions for library consumers

pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::{ErrorMap, ValidationFailure, ValidationResult};
pub use services::{DeriveValidator, Validator};
pub use utils::{MapperError, MapperResult};

// Re-export the mapping operations for direct use
pub use services::{group_failures, to_multi_line_message, validate_entity};
