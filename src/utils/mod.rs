// Utility modules for validation-mapper

pub mod mapper_errors;

pub use mapper_errors::{MapperError, MapperResult};
