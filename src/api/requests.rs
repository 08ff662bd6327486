// Request bodies. Every field is optional at the serde level so that a missing
// field becomes a ValidationError naming it, not a generic JSON rejection.
// Unknown keys are ignored, which is what makes updates whitelist-only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(alias = "authorId")]
    pub author_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A submitted comment: `{"content": "..."}` or just `"..."`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentInput {
    Text(String),
    Object { content: Option<String> },
}

impl CommentInput {
    pub fn into_content(self) -> Option<String> {
        match self {
            CommentInput::Text(content) => Some(content),
            CommentInput::Object { content } => content,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppendCommentRequest {
    pub id: Option<String>,
    #[serde(alias = "comment")]
    pub comments: Option<CommentInput>,
}
