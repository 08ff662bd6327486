// handlers/mod.rs - HTTP handlers grouped by resource
//
// Handlers only translate between HTTP and the services:
//   authors  → services::AuthorService
//   posts    → services::BlogPostService (posts and nested comments)
//   root     → service info, health probe, 404 fallback

pub mod authors;
pub mod posts;
pub mod root;
