// handlers/posts.rs - Blog post resource endpoints, including comments

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::api::format::{BlogPostList, BlogPostView};
use crate::api::requests::{AppendCommentRequest, CreatePostRequest, UpdatePostRequest};
use crate::middleware::{ApiResponse, ApiResult};
use crate::server::AppState;

/// GET /posts - List all posts with author names resolved
pub async fn list(State(state): State<AppState>) -> ApiResult<BlogPostList> {
    let posts = state.posts().list().await?;
    Ok(ApiResponse::success(BlogPostList { posts }))
}

/// GET /posts/:id - Show a single post
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<BlogPostView> {
    let post = state.posts().get(&id).await?;
    Ok(ApiResponse::success(post))
}

/// POST /posts - Create a post for an existing author
///
/// Expected Input:
/// ```json
/// { "title": "...", "content": "...", "author_id": "<author uuid>" }
/// ```
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> ApiResult<BlogPostView> {
    let Json(req) = payload?;
    let post = state.posts().create(req).await?;
    Ok(ApiResponse::created(post))
}

/// PUT /posts/:id - Partially update `title` and/or `content`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> ApiResult<BlogPostView> {
    let Json(req) = payload?;
    let post = state.posts().update(&id, req).await?;
    Ok(ApiResponse::success(post))
}

/// PUT /posts/comments/:id - Append a comment to a post
///
/// Expected Input:
/// ```json
/// { "id": "<post uuid>", "comments": { "content": "nice" } }
/// ```
pub async fn append_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AppendCommentRequest>, JsonRejection>,
) -> ApiResult<BlogPostView> {
    let Json(req) = payload?;
    let post = state.posts().append_comment(&id, req).await?;
    Ok(ApiResponse::success(post))
}

/// DELETE /posts/:id - Delete a post
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.posts().delete(&id).await?;
    Ok(ApiResponse::no_content())
}
