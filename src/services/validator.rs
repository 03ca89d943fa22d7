// Validator capability and adapters for validation backends

use validator::Validate;

use crate::models::{ErrorMap, ValidationFailure, ValidationResult};

/// A validation backend for entities of type `E`.
///
/// One method, so any engine can be plugged in: a hand-rolled rule set, a
/// closure, or the `validator` derive bridge below.
pub trait Validator<E> {
    fn validate(&self, entity: &E) -> ValidationResult;
}

/// Closures act as validators directly. Handy for tests and one-off rules.
impl<E, F> Validator<E> for F
where
    F: Fn(&E) -> ValidationResult,
{
    fn validate(&self, entity: &E) -> ValidationResult {
        self(entity)
    }
}

/// Bridge to entities annotated with the `validator` crate's derive.
///
/// Runs `Validate::validate` and flattens each field error into a
/// [`ValidationFailure`], preferring the annotated message and falling back
/// to the rule code when none was given.
pub struct DeriveValidator;

impl<E: Validate> Validator<E> for DeriveValidator {
    fn validate(&self, entity: &E) -> ValidationResult {
        match entity.validate() {
            Ok(()) => ValidationResult::success(),
            Err(errors) => ValidationResult::failure(failures_from(&errors)),
        }
    }
}

impl From<validator::ValidationErrors> for ErrorMap {
    fn from(errors: validator::ValidationErrors) -> Self {
        failures_from(&errors).into_iter().collect()
    }
}

// Top-level field errors only; nested struct and list errors are the
// caller's concern.
fn failures_from(errors: &validator::ValidationErrors) -> Vec<ValidationFailure> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                ValidationFailure::new(field, message)
            })
        })
        .collect()
}
