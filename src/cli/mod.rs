pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use client::ApiClient;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

#[derive(Parser)]
#[command(name = "blog")]
#[command(about = "Blog CLI - Command-line client for the Blog API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "BLOG_API_URL",
        default_value = DEFAULT_SERVER,
        help = "Base URL of the Blog API server"
    )]
    pub server: String,

    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check server and store health")]
    Health,

    #[command(about = "Author management")]
    Author {
        #[command(subcommand)]
        cmd: commands::authors::AuthorCommands,
    },

    #[command(about = "Blog post and comment management")]
    Post {
        #[command(subcommand)]
        cmd: commands::posts::PostCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.server)?;

    match cli.command {
        Commands::Health => commands::health::handle(&client, output_format).await,
        Commands::Author { cmd } => commands::authors::handle(cmd, &client, output_format).await,
        Commands::Post { cmd } => commands::posts::handle(cmd, &client, output_format).await,
    }
}
