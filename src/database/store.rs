use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{
    Author, AuthorChanges, BlogPost, BlogPostChanges, Comment, NewAuthor, NewBlogPost,
};

/// Errors surfaced by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint (author user name) rejected the write.
    #[error("Duplicate value for {0}")]
    Duplicate(&'static str),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence for the `authors` and `blog_posts` collections.
///
/// Every method is a single store round trip. Compound operations (check then
/// create, cascade then delete) are composed by the services on top of this
/// trait, in order, stopping at the first failure.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// All authors in store order (creation order).
    async fn list_authors(&self) -> Result<Vec<Author>, StoreError>;

    async fn find_author(&self, id: Uuid) -> Result<Option<Author>, StoreError>;

    async fn find_author_by_user_name(&self, user_name: &str) -> Result<Option<Author>, StoreError>;

    /// Insert with a store-generated id. Fails with `Duplicate` if the user
    /// name is taken.
    async fn insert_author(&self, author: NewAuthor) -> Result<Author, StoreError>;

    /// Apply `changes` to an existing author. `Ok(None)` when the id is unknown.
    async fn update_author(
        &self,
        id: Uuid,
        changes: &AuthorChanges,
    ) -> Result<Option<Author>, StoreError>;

    /// Returns whether a record was removed.
    async fn delete_author(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list_posts(&self) -> Result<Vec<BlogPost>, StoreError>;

    async fn find_post(&self, id: Uuid) -> Result<Option<BlogPost>, StoreError>;

    async fn insert_post(&self, post: NewBlogPost) -> Result<BlogPost, StoreError>;

    async fn update_post(
        &self,
        id: Uuid,
        changes: &BlogPostChanges,
    ) -> Result<Option<BlogPost>, StoreError>;

    /// Replace the whole comment sequence of a post.
    async fn replace_comments(
        &self,
        id: Uuid,
        comments: &[Comment],
    ) -> Result<Option<BlogPost>, StoreError>;

    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Delete every post owned by `author_id`, returning how many went.
    async fn delete_posts_by_author(&self, author_id: Uuid) -> Result<u64, StoreError>;

    /// Cheap connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release connections. Called once on shutdown.
    async fn close(&self) {}
}
