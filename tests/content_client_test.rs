//! Content client behavior against a mocked content platform.

mod common;

use std::sync::Arc;

use mockito::Server;
use seo_gateway::content::{ContentClient, EntryCache};

fn client_for(server: &Server) -> ContentClient {
    ContentClient::new(reqwest::Client::new(), server.url())
}

#[tokio::test]
async fn test_fetch_list_passes_query_params() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/blog/posts")
        .match_query(mockito::Matcher::UrlEncoded(
            "limit".to_string(),
            "200".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            common::list_response(vec![common::post_entry("a", "A", "first")]).to_string(),
        )
        .create_async()
        .await;

    let list = client_for(&server)
        .fetch_list("/blog/posts", &[("limit", "200".to_string())])
        .await
        .expect("list should resolve");

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].slug(), "a");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_soft_failure() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/blog/categories")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let result = client_for(&server).fetch_list("/blog/categories", &[]).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn test_network_error_is_soft_failure() {
    // Nothing listens on port 1.
    let client = ContentClient::new(reqwest::Client::new(), "http://127.0.0.1:1");
    assert!(client.fetch_list("/blog/posts", &[]).await.is_none());
    assert!(client.fetch_entry("whatever").await.is_none());
    assert!(client.fetch_asset("whatever").await.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_soft_failure() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/entries/e-1")
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    assert!(client_for(&server).fetch_entry("e-1").await.is_none());
}

#[tokio::test]
async fn test_fetch_asset_normalizes_protocol_relative_url() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/assets/img-1")
        .with_status(200)
        .with_body(common::asset_response("//images.ctfassets.net/feature.png", 1024, 512).to_string())
        .create_async()
        .await;

    let asset = client_for(&server)
        .fetch_asset("img-1")
        .await
        .expect("asset should resolve");

    assert_eq!(asset.url, "https://images.ctfassets.net/feature.png");
    assert_eq!(asset.width, Some(1024));
    assert_eq!(asset.height, Some(512));
}

#[tokio::test]
async fn test_asset_without_file_url_is_soft_failure() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/assets/img-2")
        .with_status(200)
        .with_body(r#"{ "sys": { "id": "img-2" }, "fields": { "title": "no file" } }"#)
        .create_async()
        .await;

    assert!(client_for(&server).fetch_asset("img-2").await.is_none());
}

#[tokio::test]
async fn test_resolve_entry_title_follows_link() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/entries/author-1")
        .with_status(200)
        .with_body(common::titled_entry("author-1", "Ana").to_string())
        .create_async()
        .await;

    let title = client_for(&server)
        .resolve_entry_title(Some(&common::link("Entry", "author-1")))
        .await;
    assert_eq!(title.as_deref(), Some("Ana"));

    // Absent or malformed link values resolve to nothing without a fetch.
    assert!(client_for(&server).resolve_entry_title(None).await.is_none());
    assert!(
        client_for(&server)
            .resolve_entry_title(Some(&serde_json::json!("not a link")))
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_entry_cache_skips_second_fetch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/entries/category-1")
        .with_status(200)
        .with_body(common::titled_entry("category-1", "Updates").to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server).with_cache(Arc::new(EntryCache::new(16)));

    let first = client.fetch_entry("category-1").await.expect("first fetch");
    let second = client.fetch_entry("category-1").await.expect("cache hit");
    assert_eq!(first.str_field("title"), second.str_field("title"));

    mock.assert_async().await;
}
