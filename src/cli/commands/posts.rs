use clap::Subcommand;
use serde_json::{json, Value};

use super::sparse_body;
use crate::cli::client::ApiClient;
use crate::cli::utils::*;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum PostCommands {
    #[command(about = "List all posts")]
    List,

    #[command(about = "Show one post with its comments")]
    Get {
        #[arg(help = "Post ID")]
        id: String,
    },

    #[command(about = "Create a post for an existing author")]
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, help = "Author ID")]
        author_id: String,
    },

    #[command(about = "Update a post's title and/or content")]
    Update {
        #[arg(help = "Post ID")]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },

    #[command(about = "Append a comment to a post")]
    Comment {
        #[arg(help = "Post ID")]
        id: String,
        #[arg(help = "Comment text")]
        content: String,
    },

    #[command(about = "Delete a post")]
    Delete {
        #[arg(help = "Post ID")]
        id: String,
    },
}

pub async fn handle(cmd: PostCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        PostCommands::List => {
            let response = client.get("/posts").await?;
            let posts = items(&response, "posts");

            if posts.is_empty() {
                return output_empty_collection(&output_format, "posts", "No posts found");
            }

            match output_format {
                OutputFormat::Json => output_json(&response)?,
                OutputFormat::Text => {
                    println!("{:<38} {:<20} {:<9} {}", "ID", "AUTHOR", "COMMENTS", "TITLE");
                    println!("{}", "-".repeat(90));
                    for post in posts {
                        println!(
                            "{:<38} {:<20} {:<9} {}",
                            field(post, "id"),
                            field(post, "author"),
                            items(post, "comments").len(),
                            field(post, "title")
                        );
                    }
                }
            }
            Ok(())
        }
        PostCommands::Get { id } => {
            let post = client.get(&format!("/posts/{}", id)).await?;
            print_post(&output_format, &post)
        }
        PostCommands::Create {
            title,
            content,
            author_id,
        } => {
            let body = json!({
                "title": title,
                "content": content,
                "author_id": author_id,
            });
            let post = client.post("/posts", &body).await?;
            print_post(&output_format, &post)
        }
        PostCommands::Update { id, title, content } => {
            let body = sparse_body(&[
                ("id", Some(id.clone())),
                ("title", title),
                ("content", content),
            ]);
            let post = client.put(&format!("/posts/{}", id), &body).await?;
            print_post(&output_format, &post)
        }
        PostCommands::Comment { id, content } => {
            let body = json!({
                "id": id,
                "comments": { "content": content },
            });
            let post = client.put(&format!("/posts/comments/{}", id), &body).await?;
            print_post(&output_format, &post)
        }
        PostCommands::Delete { id } => {
            client.delete(&format!("/posts/{}", id)).await?;
            output_success(
                &output_format,
                &format!("Post '{}' deleted", id),
                Some(json!({ "id": id })),
            )
        }
    }
}

fn print_post(output_format: &OutputFormat, post: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => output_json(post),
        OutputFormat::Text => {
            println!("ID:     {}", field(post, "id"));
            println!("Title:  {}", field(post, "title"));
            println!("Author: {}", field(post, "author"));
            println!();
            println!("{}", field(post, "content"));

            let comments = items(post, "comments");
            if !comments.is_empty() {
                println!();
                println!("Comments ({}):", comments.len());
                for comment in comments {
                    println!("  - {}", field(comment, "content"));
                }
            }
            Ok(())
        }
    }
}
