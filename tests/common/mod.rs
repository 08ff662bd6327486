#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use blog_api::config::{AppConfig, StorageBackend};
use blog_api::database::MemoryBlogStore;
use blog_api::server::{self, ServerHandle};

/// An in-process server backed by a fresh in-memory store
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
    handle: ServerHandle,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;

        let mut config = AppConfig::development();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = port;
        config.database.storage = StorageBackend::Memory;
        config.api.enable_request_logging = false;

        let handle = server::start(&config, Arc::new(MemoryBlogStore::new())).await?;
        let server = Self {
            port,
            base_url: handle.base_url(),
            client: reqwest::Client::new(),
            handle,
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn stop(self) -> Result<()> {
        self.handle.stop().await?;
        Ok(())
    }

    pub async fn get(&self, path: &str) -> Result<(StatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        read(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<(StatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(body).send().await?;
        read(res).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<(StatusCode, Value)> {
        let res = self.client.put(self.url(path)).json(body).send().await?;
        read(res).await
    }

    pub async fn delete(&self, path: &str) -> Result<(StatusCode, Value)> {
        let res = self.client.delete(self.url(path)).send().await?;
        read(res).await
    }

    /// Create an author and return its id
    pub async fn create_author(&self, first: &str, last: &str, user_name: &str) -> Result<String> {
        let (status, body) = self
            .post(
                "/authors",
                &json!({ "firstName": first, "lastName": last, "userName": user_name }),
            )
            .await?;
        anyhow::ensure!(status == StatusCode::CREATED, "create author failed: {} {}", status, body);
        id_of(&body)
    }

    /// Create a post and return its id
    pub async fn create_post(&self, author_id: &str, title: &str) -> Result<String> {
        let (status, body) = self
            .post(
                "/posts",
                &json!({ "title": title, "content": format!("{} body", title), "author_id": author_id }),
            )
            .await?;
        anyhow::ensure!(status == StatusCode::CREATED, "create post failed: {} {}", status, body);
        id_of(&body)
    }
}

async fn read(res: reqwest::Response) -> Result<(StatusCode, Value)> {
    let status = res.status();
    let bytes = res.bytes().await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).with_context(|| format!("non-JSON body with status {}", status))?
    };
    Ok((status, body))
}

fn id_of(body: &Value) -> Result<String> {
    body.get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .with_context(|| format!("missing id in {}", body))
}
