// Result mapping operations
// Reshapes validation engine output for web form and API consumption.

use tracing::debug;

use crate::models::{ErrorMap, ValidationFailure};
use crate::services::validator::Validator;
use crate::utils::{MapperError, MapperResult};

// Fixed separator, not the platform line ending.
const LINE_SEPARATOR: &str = "\n";

/// Run a validator over an entity and group the failures per field.
///
/// A validator reporting no failures yields an empty map.
pub fn validate_entity<E, V>(validator: &V, entity: &E) -> ErrorMap
where
    V: Validator<E> + ?Sized,
{
    let result = validator.validate(entity);
    if result.is_valid() {
        return ErrorMap::new();
    }

    let map = group_failures(result.failures);
    debug!(
        fields = map.len(),
        "entity validation produced failures"
    );
    map
}

/// Stable group-by on field name: one in-order pass, each message appended
/// to the sequence for its field, fields created on first occurrence.
pub fn group_failures<I>(failures: I) -> ErrorMap
where
    I: IntoIterator<Item = ValidationFailure>,
{
    failures.into_iter().collect()
}

/// Flatten an error map into one multi-line message.
///
/// Messages appear in map order then per-field order, joined with a single
/// `\n` between consecutive pairs and no trailing separator. Fails with
/// [`MapperError::InvalidArgument`] when the map is absent and
/// [`MapperError::EmptyInput`] when it has no entries.
pub fn to_multi_line_message(errors: Option<&ErrorMap>) -> MapperResult<String> {
    let errors = errors.ok_or(MapperError::InvalidArgument("errors"))?;
    if errors.is_empty() {
        return Err(MapperError::EmptyInput);
    }

    Ok(errors
        .flattened_messages()
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR))
}
