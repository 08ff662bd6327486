use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::models::{
    Author, AuthorChanges, BlogPost, BlogPostChanges, Comment, NewAuthor, NewBlogPost,
};
use crate::database::store::{BlogStore, StoreError};

#[derive(Debug, Default)]
struct Collections {
    // Vecs keep insertion order, which is the store default order for lists.
    authors: Vec<Author>,
    posts: Vec<BlogPost>,
}

/// In-process store used for local development and tests
#[derive(Debug, Default)]
pub struct MemoryBlogStore {
    inner: RwLock<Collections>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn user_name_taken(authors: &[Author], user_name: &str, except: Option<Uuid>) -> bool {
    authors
        .iter()
        .any(|a| a.user_name == user_name && Some(a.id) != except)
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn list_authors(&self) -> Result<Vec<Author>, StoreError> {
        Ok(self.inner.read().await.authors.clone())
    }

    async fn find_author(&self, id: Uuid) -> Result<Option<Author>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.authors.iter().find(|a| a.id == id).cloned())
    }

    async fn find_author_by_user_name(&self, user_name: &str) -> Result<Option<Author>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.authors.iter().find(|a| a.user_name == user_name).cloned())
    }

    async fn insert_author(&self, author: NewAuthor) -> Result<Author, StoreError> {
        let mut inner = self.inner.write().await;
        if user_name_taken(&inner.authors, &author.user_name, None) {
            return Err(StoreError::Duplicate("user_name"));
        }

        let stored = Author {
            id: Uuid::new_v4(),
            first_name: author.first_name,
            last_name: author.last_name,
            user_name: author.user_name,
            created_at: Utc::now(),
        };
        inner.authors.push(stored.clone());
        Ok(stored)
    }

    async fn update_author(
        &self,
        id: Uuid,
        changes: &AuthorChanges,
    ) -> Result<Option<Author>, StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(user_name) = &changes.user_name {
            if user_name_taken(&inner.authors, user_name, Some(id)) {
                return Err(StoreError::Duplicate("user_name"));
            }
        }

        let Some(author) = inner.authors.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        changes.apply_to(author);
        Ok(Some(author.clone()))
    }

    async fn delete_author(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.authors.len();
        inner.authors.retain(|a| a.id != id);
        Ok(inner.authors.len() != before)
    }

    async fn list_posts(&self) -> Result<Vec<BlogPost>, StoreError> {
        Ok(self.inner.read().await.posts.clone())
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<BlogPost>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_post(&self, post: NewBlogPost) -> Result<BlogPost, StoreError> {
        let stored = BlogPost {
            id: Uuid::new_v4(),
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            comments: Vec::new(),
            created_at: Utc::now(),
        };
        self.inner.write().await.posts.push(stored.clone());
        Ok(stored)
    }

    async fn update_post(
        &self,
        id: Uuid,
        changes: &BlogPostChanges,
    ) -> Result<Option<BlogPost>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(post) = inner.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        changes.apply_to(post);
        Ok(Some(post.clone()))
    }

    async fn replace_comments(
        &self,
        id: Uuid,
        comments: &[Comment],
    ) -> Result<Option<BlogPost>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(post) = inner.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        post.comments = comments.to_vec();
        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.posts.len();
        inner.posts.retain(|p| p.id != id);
        Ok(inner.posts.len() != before)
    }

    async fn delete_posts_by_author(&self, author_id: Uuid) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.posts.len();
        inner.posts.retain(|p| p.author_id != author_id);
        Ok((before - inner.posts.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
