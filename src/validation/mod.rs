// validation/mod.rs - Request shape checks shared by the author and post services
//
// Everything here runs before the store is touched, so a failure never leaves
// a partial mutation behind.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`{0}` is missing in request body")]
    MissingField(&'static str),

    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("Request path id ({path}) and request body id ({body}) must match")]
    IdMismatch { path: String, body: String },

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Author not found")]
    AuthorNotFound,
}

impl ValidationError {
    /// Name of the offending request field, if the error is about one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField(field) | ValidationError::EmptyField(field) => Some(field),
            ValidationError::IdMismatch { .. } => Some("id"),
            ValidationError::AuthorNotFound => Some("author_id"),
            ValidationError::InvalidId(_) => None,
        }
    }
}

/// A required create field: present and not blank.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// An optional update field: absent is fine, present must not be blank.
pub fn optional_non_empty(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ValidationError::EmptyField(field)),
        other => Ok(other),
    }
}

/// The id in the path and the id in the body must both be present and equal.
pub fn ensure_ids_match(path_id: &str, body_id: Option<&str>) -> Result<(), ValidationError> {
    match body_id {
        Some(body) if !path_id.is_empty() && body == path_id => Ok(()),
        other => Err(ValidationError::IdMismatch {
            path: path_id.to_string(),
            body: other.unwrap_or("undefined").to_string(),
        }),
    }
}

pub fn parse_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::InvalidId(raw.to_string()))
}
