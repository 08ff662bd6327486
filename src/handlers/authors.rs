// handlers/authors.rs - Author resource endpoints
//
// Thin HTTP layer: extract path/body, call AuthorService, pick the status.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::api::format::{AuthorList, AuthorView};
use crate::api::requests::{CreateAuthorRequest, UpdateAuthorRequest};
use crate::middleware::{ApiResponse, ApiResult};
use crate::server::AppState;

/// GET /authors - List all authors
pub async fn list(State(state): State<AppState>) -> ApiResult<AuthorList> {
    let authors = state.authors().list().await?;
    Ok(ApiResponse::success(AuthorList { authors }))
}

/// GET /authors/:id - Show a single author
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<AuthorView> {
    let author = state.authors().get(&id).await?;
    Ok(ApiResponse::success(author))
}

/// POST /authors - Create an author
///
/// Expected Input:
/// ```json
/// { "firstName": "Ada", "lastName": "Lovelace", "userName": "ada" }
/// ```
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateAuthorRequest>, JsonRejection>,
) -> ApiResult<AuthorView> {
    let Json(req) = payload?;
    let author = state.authors().create(req).await?;
    Ok(ApiResponse::created(author))
}

/// PUT /authors/:id - Partially update an author
///
/// The body must repeat the id from the path. Only `firstName`, `lastName`
/// and `userName` are applied; anything else in the body is ignored.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAuthorRequest>, JsonRejection>,
) -> ApiResult<AuthorView> {
    let Json(req) = payload?;
    let author = state.authors().update(&id, req).await?;
    Ok(ApiResponse::success(author))
}

/// DELETE /authors/:id - Delete an author and all of their posts
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.authors().delete(&id).await?;
    Ok(ApiResponse::no_content())
}
