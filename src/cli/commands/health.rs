use crate::cli::client::ApiClient;
use crate::cli::utils::{field, output_json};
use crate::cli::OutputFormat;

pub async fn handle(client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let health = client.get("/health").await?;

    match output_format {
        OutputFormat::Json => output_json(&health)?,
        OutputFormat::Text => {
            println!("Status: {}", field(&health, "status"));
            println!("Store:  {}", field(&health, "store"));
            println!("Time:   {}", field(&health, "timestamp"));
        }
    }
    Ok(())
}
