// Service layer for validation-mapper

pub mod mapper;
pub mod validator;

pub use mapper::{group_failures, to_multi_line_message, validate_entity};
pub use validator::{DeriveValidator, Validator};
