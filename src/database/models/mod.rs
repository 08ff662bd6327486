pub mod author;
pub mod blog_post;

pub use author::{Author, AuthorChanges, NewAuthor};
pub use blog_post::{BlogPost, BlogPostChanges, BlogPostRow, Comment, NewBlogPost};
