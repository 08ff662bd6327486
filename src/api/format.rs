use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::database::models::{Author, BlogPost, Comment};

/// Public wire format of an author: { id, name, firstName, lastName, userName }
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub id: Uuid,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

/// Public wire format of a post. `author` is the author's display name,
/// resolved at read time; `null` if the author record is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub author_id: Uuid,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorList {
    pub authors: Vec<AuthorView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostList {
    pub posts: Vec<BlogPostView>,
}

impl From<&Author> for AuthorView {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name(),
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            user_name: author.user_name.clone(),
        }
    }
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            content: comment.content.clone(),
        }
    }
}

pub fn author_to_view(author: &Author) -> AuthorView {
    AuthorView::from(author)
}

/// Serialize a post, taking the display name from its current author record
pub fn post_to_view(post: &BlogPost, author: Option<&Author>) -> BlogPostView {
    BlogPostView {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        author: author.map(Author::name),
        author_id: post.author_id,
        comments: post.comments.iter().map(CommentView::from).collect(),
    }
}

/// Serialize many posts against one author lookup table
pub fn posts_to_views(posts: &[BlogPost], authors: &HashMap<Uuid, Author>) -> Vec<BlogPostView> {
    posts
        .iter()
        .map(|p| post_to_view(p, authors.get(&p.author_id)))
        .collect()
}
