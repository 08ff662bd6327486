mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_reports_ok() -> Result<()> {
    let server = common::TestServer::start().await?;

    let (status, body) = server.get("/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "ok");

    server.stop().await
}

#[tokio::test]
async fn root_describes_service() -> Result<()> {
    let server = common::TestServer::start().await?;

    let (status, body) = server.get("/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Blog API");
    assert!(body["endpoints"]["authors"].is_string(), "missing endpoints: {}", body);

    server.stop().await
}

#[tokio::test]
async fn unknown_route_is_json_404() -> Result<()> {
    let server = common::TestServer::start().await?;

    let (status, body) = server.get("/does/not/exist").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    assert_eq!(body["error"], true);

    server.stop().await
}
