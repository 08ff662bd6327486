use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::format::{author_to_view, AuthorView};
use crate::api::requests::{CreateAuthorRequest, UpdateAuthorRequest};
use crate::database::models::{AuthorChanges, NewAuthor};
use crate::database::store::BlogStore;
use crate::validation::{ensure_ids_match, optional_non_empty, parse_id, required};

use super::{ServiceError, ServiceResult, USERNAME_TAKEN};

/// What a cascade delete removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorDeletion {
    pub author_removed: bool,
    pub posts_removed: u64,
}

/// Author resource: list, get, create, update, cascade delete
#[derive(Clone)]
pub struct AuthorService {
    store: Arc<dyn BlogStore>,
}

impl AuthorService {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> ServiceResult<Vec<AuthorView>> {
        let authors = self.store.list_authors().await?;
        Ok(authors.iter().map(author_to_view).collect())
    }

    pub async fn get(&self, id: &str) -> ServiceResult<AuthorView> {
        let id = parse_id(id)?;
        let author = self
            .store
            .find_author(id)
            .await?
            .ok_or_else(|| author_not_found(id))?;
        Ok(author_to_view(&author))
    }

    pub async fn create(&self, req: CreateAuthorRequest) -> ServiceResult<AuthorView> {
        let new_author = NewAuthor {
            first_name: required("firstName", req.first_name)?,
            last_name: required("lastName", req.last_name)?,
            user_name: required("userName", req.user_name)?,
        };

        if self
            .store
            .find_author_by_user_name(&new_author.user_name)
            .await?
            .is_some()
        {
            warn!("Rejected author create, username taken: {}", new_author.user_name);
            return Err(ServiceError::Conflict(USERNAME_TAKEN.to_string()));
        }

        let author = self.store.insert_author(new_author).await?;
        info!("Created author {} ({})", author.id, author.user_name);
        Ok(author_to_view(&author))
    }

    /// Whitelisted partial update. Only `firstName`, `lastName` and
    /// `userName` present in the body are applied.
    pub async fn update(&self, path_id: &str, req: UpdateAuthorRequest) -> ServiceResult<AuthorView> {
        ensure_ids_match(path_id, req.id.as_deref())?;
        let id = parse_id(path_id)?;

        let changes = AuthorChanges {
            first_name: optional_non_empty("firstName", req.first_name)?,
            last_name: optional_non_empty("lastName", req.last_name)?,
            user_name: optional_non_empty("userName", req.user_name)?,
        };

        if let Some(user_name) = &changes.user_name {
            if let Some(holder) = self.store.find_author_by_user_name(user_name).await? {
                if holder.id != id {
                    warn!("Rejected author update {}, username taken: {}", id, user_name);
                    return Err(ServiceError::Conflict(USERNAME_TAKEN.to_string()));
                }
            }
        }

        // Nothing whitelisted in the body: read back instead of writing
        let updated = if changes.is_empty() {
            self.store.find_author(id).await?
        } else {
            self.store.update_author(id, &changes).await?
        };
        let author = updated.ok_or_else(|| author_not_found(id))?;
        info!("Updated author {}", author.id);
        Ok(author_to_view(&author))
    }

    /// Delete the author's posts, then the author. Unknown ids are a no-op.
    pub async fn delete(&self, id: &str) -> ServiceResult<AuthorDeletion> {
        let id = parse_id(id)?;

        let posts_removed = self.store.delete_posts_by_author(id).await?;
        let author_removed = self.store.delete_author(id).await?;

        info!(
            "Deleted author {} (found: {}, posts removed: {})",
            id, author_removed, posts_removed
        );
        Ok(AuthorDeletion {
            author_removed,
            posts_removed,
        })
    }
}

fn author_not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("Author {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestContext;
    use crate::validation::ValidationError;

    fn create_req(first: &str, last: &str, user: &str) -> CreateAuthorRequest {
        CreateAuthorRequest {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            user_name: Some(user.to_string()),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let ctx = TestContext::new();
        let created = ctx.authors.create(create_req("Ada", "Lovelace", "ada")).await.unwrap();

        let fetched = ctx.authors.get(&created.id.to_string()).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.first_name, "Ada");
        assert_eq!(fetched.last_name, "Lovelace");
        assert_eq!(fetched.user_name, "ada");
        assert_eq!(fetched.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn create_names_first_missing_field() {
        let ctx = TestContext::new();
        let req = CreateAuthorRequest {
            first_name: Some("Ada".to_string()),
            last_name: None,
            user_name: None,
        };

        let err = ctx.authors.create(req).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::MissingField("lastName"))
        ));
    }

    #[tokio::test]
    async fn duplicate_user_name_is_conflict_and_not_stored() {
        let ctx = TestContext::new();
        ctx.authors.create(create_req("Ada", "Lovelace", "ada")).await.unwrap();

        let err = ctx
            .authors
            .create(create_req("Ada", "King", "ada"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(ctx.authors.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_with_mismatched_ids_leaves_record_unchanged() {
        let ctx = TestContext::new();
        let ada = ctx.authors.create(create_req("Ada", "Lovelace", "ada")).await.unwrap();

        let req = UpdateAuthorRequest {
            id: Some(uuid::Uuid::new_v4().to_string()),
            first_name: Some("Augusta".to_string()),
            ..Default::default()
        };
        let err = ctx.authors.update(&ada.id.to_string(), req).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::IdMismatch { .. })
        ));

        let stored = ctx.authors.get(&ada.id.to_string()).await.unwrap();
        assert_eq!(stored.first_name, "Ada");
    }

    #[tokio::test]
    async fn update_only_first_name_keeps_other_fields() {
        let ctx = TestContext::new();
        let ada = ctx.authors.create(create_req("Ada", "Lovelace", "ada")).await.unwrap();
        let id = ada.id.to_string();

        let req = UpdateAuthorRequest {
            id: Some(id.clone()),
            first_name: Some("Augusta".to_string()),
            ..Default::default()
        };
        let updated = ctx.authors.update(&id, req).await.unwrap();

        assert_eq!(updated.first_name, "Augusta");
        assert_eq!(updated.last_name, "Lovelace");
        assert_eq!(updated.user_name, "ada");
        assert_eq!(updated.name, "Augusta Lovelace");
    }

    #[tokio::test]
    async fn update_to_another_authors_user_name_conflicts() {
        let ctx = TestContext::new();
        ctx.authors.create(create_req("Ada", "Lovelace", "ada")).await.unwrap();
        let grace = ctx.authors.create(create_req("Grace", "Hopper", "grace")).await.unwrap();
        let id = grace.id.to_string();

        let req = UpdateAuthorRequest {
            id: Some(id.clone()),
            user_name: Some("ada".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            ctx.authors.update(&id, req).await,
            Err(ServiceError::Conflict(_))
        ));

        // Re-submitting one's own user name is fine
        let req = UpdateAuthorRequest {
            id: Some(id.clone()),
            user_name: Some("grace".to_string()),
            ..Default::default()
        };
        assert!(ctx.authors.update(&id, req).await.is_ok());
    }

    #[tokio::test]
    async fn update_unknown_author_is_not_found() {
        let ctx = TestContext::new();
        let id = uuid::Uuid::new_v4().to_string();
        let req = UpdateAuthorRequest {
            id: Some(id.clone()),
            last_name: Some("King".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            ctx.authors.update(&id, req).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_without_fields_returns_current_author() {
        let ctx = TestContext::new();
        let ada = ctx.seed_author("ada").await;
        let id = ada.id.to_string();

        let req = UpdateAuthorRequest {
            id: Some(id.clone()),
            ..Default::default()
        };
        let unchanged = ctx.authors.update(&id, req).await.unwrap();
        assert_eq!(unchanged.name, "Ada Lovelace");
        assert_eq!(unchanged.user_name, "ada");

        let missing = uuid::Uuid::new_v4().to_string();
        let req = UpdateAuthorRequest {
            id: Some(missing.clone()),
            ..Default::default()
        };
        assert!(matches!(
            ctx.authors.update(&missing, req).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_cascades_to_posts_and_is_idempotent() {
        let ctx = TestContext::new();
        let ada = ctx.seed_author("ada").await;
        let grace = ctx.seed_author("grace").await;
        ctx.seed_post(ada.id, "P1").await;
        ctx.seed_post(ada.id, "P2").await;
        let kept = ctx.seed_post(grace.id, "P3").await;

        let deletion = ctx.authors.delete(&ada.id.to_string()).await.unwrap();
        assert_eq!(
            deletion,
            AuthorDeletion {
                author_removed: true,
                posts_removed: 2
            }
        );

        let posts = ctx.posts.list().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, kept.id);
        assert!(matches!(
            ctx.authors.get(&ada.id.to_string()).await,
            Err(ServiceError::NotFound(_))
        ));

        let again = ctx.authors.delete(&ada.id.to_string()).await.unwrap();
        assert!(!again.author_removed);
    }
}
