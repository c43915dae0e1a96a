use serde_json::json;
use std::time::Duration;
use vaultfeed::thumbs::{LookupError, OEmbedClient, ThumbnailLookup};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLIP: &str = "https://www.tiktok.com/@chef/video/7460528404337610006";

async fn client_for(server: &MockServer) -> OEmbedClient {
    OEmbedClient::new(
        reqwest::Client::new(),
        &format!("{}/oembed", server.uri()),
        Duration::from_secs(2),
    )
}

#[tokio::test]
async fn test_returns_thumbnail_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .and(query_param("url", CLIP))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": "1.0",
            "type": "video",
            "title": "Pasta",
            "thumbnail_url": "https://p16.tiktokcdn.example/thumb.jpeg"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let url = client.lookup(CLIP).await.unwrap();
    assert_eq!(url, "https://p16.tiktokcdn.example/thumb.jpeg");
}

#[tokio::test]
async fn test_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_thumbnail(CLIP).await.unwrap_err();
    assert!(matches!(err, LookupError::Status(s) if s.as_u16() == 404));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_thumbnail(CLIP).await.unwrap_err();
    assert!(matches!(err, LookupError::Malformed(_)));
}

#[tokio::test]
async fn test_missing_or_empty_thumbnail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .and(query_param("url", CLIP))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "title": "Pasta" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .and(query_param("url", "https://www.tiktok.com/@chef/video/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "thumbnail_url": "  " })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(matches!(
        client.fetch_thumbnail(CLIP).await,
        Err(LookupError::MissingThumbnail)
    ));
    assert!(matches!(
        client.fetch_thumbnail("https://www.tiktok.com/@chef/video/1").await,
        Err(LookupError::MissingThumbnail)
    ));
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "thumbnail_url": "https://late.example/t.jpg" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = OEmbedClient::new(
        reqwest::Client::new(),
        &format!("{}/oembed", server.uri()),
        Duration::from_millis(50),
    );
    assert!(matches!(
        client.fetch_thumbnail(CLIP).await,
        Err(LookupError::Transport(_))
    ));
}
