use clap::Subcommand;
use serde_json::{json, Value};

use super::sparse_body;
use crate::cli::client::ApiClient;
use crate::cli::utils::*;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum AuthorCommands {
    #[command(about = "List all authors")]
    List,

    #[command(about = "Show one author")]
    Get {
        #[arg(help = "Author ID")]
        id: String,
    },

    #[command(about = "Create an author")]
    Create {
        #[arg(long, help = "First name")]
        first_name: String,
        #[arg(long, help = "Last name")]
        last_name: String,
        #[arg(long, help = "Unique user name")]
        user_name: String,
    },

    #[command(about = "Update an author's names")]
    Update {
        #[arg(help = "Author ID")]
        id: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        user_name: Option<String>,
    },

    #[command(about = "Delete an author and all of their posts")]
    Delete {
        #[arg(help = "Author ID")]
        id: String,
    },
}

pub async fn handle(cmd: AuthorCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthorCommands::List => {
            let response = client.get("/authors").await?;
            let authors = items(&response, "authors");

            if authors.is_empty() {
                return output_empty_collection(&output_format, "authors", "No authors found");
            }

            match output_format {
                OutputFormat::Json => output_json(&response)?,
                OutputFormat::Text => {
                    println!("{:<38} {:<20} {}", "ID", "USERNAME", "NAME");
                    println!("{}", "-".repeat(80));
                    for author in authors {
                        println!(
                            "{:<38} {:<20} {}",
                            field(author, "id"),
                            field(author, "userName"),
                            field(author, "name")
                        );
                    }
                }
            }
            Ok(())
        }
        AuthorCommands::Get { id } => {
            let author = client.get(&format!("/authors/{}", id)).await?;
            print_author(&output_format, &author)
        }
        AuthorCommands::Create {
            first_name,
            last_name,
            user_name,
        } => {
            let body = json!({
                "firstName": first_name,
                "lastName": last_name,
                "userName": user_name,
            });
            let author = client.post("/authors", &body).await?;
            print_author(&output_format, &author)
        }
        AuthorCommands::Update {
            id,
            first_name,
            last_name,
            user_name,
        } => {
            let body = sparse_body(&[
                ("id", Some(id.clone())),
                ("firstName", first_name),
                ("lastName", last_name),
                ("userName", user_name),
            ]);
            let author = client.put(&format!("/authors/{}", id), &body).await?;
            print_author(&output_format, &author)
        }
        AuthorCommands::Delete { id } => {
            client.delete(&format!("/authors/{}", id)).await?;
            output_success(
                &output_format,
                &format!("Author '{}' deleted", id),
                Some(json!({ "id": id })),
            )
        }
    }
}

fn print_author(output_format: &OutputFormat, author: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => output_json(author),
        OutputFormat::Text => {
            println!("ID:       {}", field(author, "id"));
            println!("Name:     {}", field(author, "name"));
            println!("Username: {}", field(author, "userName"));
            Ok(())
        }
    }
}
