use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::store::BlogStore;
use crate::services::{AuthorService, BlogPostService};

/// Application state shared across all handlers.
///
/// Cloneable; handlers extract it with `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn BlogStore>,
    config: Arc<AppConfig>,
    authors: AuthorService,
    posts: BlogPostService,
}

impl AppState {
    pub fn new(store: Arc<dyn BlogStore>, config: AppConfig) -> Self {
        Self {
            authors: AuthorService::new(store.clone()),
            posts: BlogPostService::new(store.clone()),
            store,
            config: Arc::new(config),
        }
    }

    pub fn store(&self) -> &dyn BlogStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn authors(&self) -> &AuthorService {
        &self.authors
    }

    pub fn posts(&self) -> &BlogPostService {
        &self.posts
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
