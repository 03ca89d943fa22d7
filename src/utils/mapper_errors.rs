// Error types for validation result mapping

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    #[error("Missing required input: {0}")]
    InvalidArgument(&'static str),

    #[error("Error map contains no entries")]
    EmptyInput,
}

pub type MapperResult<T> = Result<T, MapperError>;
