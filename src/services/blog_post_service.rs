use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::format::{post_to_view, posts_to_views, BlogPostView};
use crate::api::requests::{
    AppendCommentRequest, CommentInput, CreatePostRequest, UpdatePostRequest,
};
use crate::database::models::{BlogPost, BlogPostChanges, Comment, NewBlogPost};
use crate::database::store::BlogStore;
use crate::validation::{
    ensure_ids_match, optional_non_empty, parse_id, required, ValidationError,
};

use super::{ServiceError, ServiceResult};

/// Blog post resource, including the nested comment append
#[derive(Clone)]
pub struct BlogPostService {
    store: Arc<dyn BlogStore>,
}

impl BlogPostService {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> ServiceResult<Vec<BlogPostView>> {
        let posts = self.store.list_posts().await?;
        let authors: HashMap<_, _> = self
            .store
            .list_authors()
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();
        Ok(posts_to_views(&posts, &authors))
    }

    pub async fn get(&self, id: &str) -> ServiceResult<BlogPostView> {
        let id = parse_id(id)?;
        let post = self
            .store
            .find_post(id)
            .await?
            .ok_or_else(|| post_not_found(id))?;
        self.view(&post).await
    }

    pub async fn create(&self, req: CreatePostRequest) -> ServiceResult<BlogPostView> {
        let title = required("title", req.title)?;
        let content = required("content", req.content)?;
        let raw_author_id = required("author_id", req.author_id)?;

        // An id that cannot name an author is reported the same as an unknown one
        let author_id = parse_id(&raw_author_id).map_err(|_| ValidationError::AuthorNotFound)?;
        let Some(author) = self.store.find_author(author_id).await? else {
            warn!("Rejected post create, author not found: {}", raw_author_id);
            return Err(ValidationError::AuthorNotFound.into());
        };

        let post = self
            .store
            .insert_post(NewBlogPost {
                title,
                content,
                author_id: author.id,
            })
            .await?;
        info!("Created post {} by author {}", post.id, author.id);
        Ok(post_to_view(&post, Some(&author)))
    }

    /// Whitelisted partial update over `title` and `content`.
    pub async fn update(&self, path_id: &str, req: UpdatePostRequest) -> ServiceResult<BlogPostView> {
        ensure_ids_match(path_id, req.id.as_deref())?;
        let id = parse_id(path_id)?;

        let changes = BlogPostChanges {
            title: optional_non_empty("title", req.title)?,
            content: optional_non_empty("content", req.content)?,
        };

        let updated = if changes.is_empty() {
            self.store.find_post(id).await?
        } else {
            self.store.update_post(id, &changes).await?
        };
        let post = updated.ok_or_else(|| post_not_found(id))?;
        info!("Updated post {}", post.id);
        self.view(&post).await
    }

    /// Append one comment to the end of the post's comment sequence.
    pub async fn append_comment(
        &self,
        path_id: &str,
        req: AppendCommentRequest,
    ) -> ServiceResult<BlogPostView> {
        ensure_ids_match(path_id, req.id.as_deref())?;
        let id = parse_id(path_id)?;
        let content = required("comments", req.comments.and_then(CommentInput::into_content))?;

        let mut post = self
            .store
            .find_post(id)
            .await?
            .ok_or_else(|| post_not_found(id))?;
        post.comments.push(Comment::new(content));

        let post = self
            .store
            .replace_comments(id, &post.comments)
            .await?
            .ok_or_else(|| post_not_found(id))?;
        info!("Appended comment to post {} ({} total)", id, post.comments.len());
        self.view(&post).await
    }

    /// Unknown ids are a no-op. Returns whether a post was removed.
    pub async fn delete(&self, id: &str) -> ServiceResult<bool> {
        let id = parse_id(id)?;
        let removed = self.store.delete_post(id).await?;
        info!("Deleted post {} (found: {})", id, removed);
        Ok(removed)
    }

    async fn view(&self, post: &BlogPost) -> ServiceResult<BlogPostView> {
        let author = self.store.find_author(post.author_id).await?;
        Ok(post_to_view(post, author.as_ref()))
    }
}

fn post_not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("Blog post {} not found", id))
}
