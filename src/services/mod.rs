pub mod author_service;
pub mod blog_post_service;

pub use author_service::{AuthorDeletion, AuthorService};
pub use blog_post_service::BlogPostService;

use thiserror::Error;

use crate::database::store::StoreError;
use crate::validation::ValidationError;

pub const USERNAME_TAKEN: &str = "That username is already taken";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            // The store's unique constraint is the last line for racing creates
            StoreError::Duplicate(_) => ServiceError::Conflict(USERNAME_TAKEN.to_string()),
            other => ServiceError::Store(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
