//! JSON payloads and query strings accepted by the API routes.

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::{ContactEmail, TypeConstraintError, WebUrl, normalize_optional};

pub mod company;
pub mod contact;
pub mod enrichment;
pub mod export;
pub mod lead;
pub mod lead_list;
pub mod saved_search;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    Constraint(#[from] TypeConstraintError),

    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Rejects values wider than their column.
pub(crate) fn check_length(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), FormError> {
    match value {
        Some(value) if value.chars().count() > max => Err(FormError::TooLong { field, max }),
        _ => Ok(()),
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`) in partial updates.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Applies a partial-update field: absent keeps `current`, `null` clears it.
pub(crate) fn patch<T>(current: Option<T>, update: Option<Option<T>>) -> Option<T> {
    match update {
        Some(value) => value,
        None => current,
    }
}

pub(crate) fn optional_url(value: Option<String>) -> Result<Option<WebUrl>, TypeConstraintError> {
    normalize_optional(value).map(WebUrl::new).transpose()
}

pub(crate) fn optional_email(
    value: Option<String>,
) -> Result<Option<ContactEmail>, TypeConstraintError> {
    normalize_optional(value).map(ContactEmail::new).transpose()
}

/// Cleans a list of filter values, dropping blanks.
pub(crate) fn clean_values(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
