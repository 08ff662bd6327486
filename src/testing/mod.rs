use std::sync::Arc;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::database::memory::MemoryBlogStore;
use crate::database::models::{Author, BlogPost, NewAuthor, NewBlogPost};
use crate::database::store::BlogStore;
use crate::server::AppState;
use crate::services::{AuthorService, BlogPostService};

/// Services wired to a fresh in-memory store, plus seeding helpers
pub struct TestContext {
    pub store: Arc<dyn BlogStore>,
    pub authors: AuthorService,
    pub posts: BlogPostService,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let store: Arc<dyn BlogStore> = Arc::new(MemoryBlogStore::new());
        Self {
            authors: AuthorService::new(store.clone()),
            posts: BlogPostService::new(store.clone()),
            store,
        }
    }

    /// Application state sharing this context's store, for router tests
    pub fn state(&self) -> AppState {
        AppState::new(self.store.clone(), AppConfig::development())
    }

    /// Insert "Ada Lovelace" under the given user name
    pub async fn seed_author(&self, user_name: &str) -> Author {
        self.store
            .insert_author(NewAuthor {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                user_name: user_name.to_string(),
            })
            .await
            .expect("seed author")
    }

    pub async fn seed_post(&self, author_id: Uuid, title: &str) -> BlogPost {
        self.store
            .insert_post(NewBlogPost {
                title: title.to_string(),
                content: format!("Body of {}", title),
                author_id,
            })
            .await
            .expect("seed post")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn contexts_do_not_share_stores() {
        let a = TestContext::new();
        let b = TestContext::default();
        a.seed_author("ada").await;

        assert_eq!(a.store.list_authors().await.unwrap().len(), 1);
        assert!(b.store.list_authors().await.unwrap().is_empty());
    }
}
