use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};
use ytapi::{ApiClient, ApiClientOptions, ApiEndpoint, ClientError, VideoApi};

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiClientOptions {
        base_url: server.uri(),
        timeout: Some(Duration::from_secs(5)),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn video_data_posts_url_and_returns_json() {
    let server = MockServer::start().await;
    let metadata = json!({ "title": "Never Gonna Give You Up", "author_name": "Rick Astley" });

    Mock::given(method("POST"))
        .and(path("/youtube/video-data"))
        .and(body_json(json!({ "url": VIDEO_URL })))
        .respond_with(ResponseTemplate::new(200).set_body_json(metadata.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let data = client_for(&server).video_data(VIDEO_URL).await.unwrap();
    assert_eq!(data, metadata);
}

#[tokio::test]
async fn captions_send_languages_and_return_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtube/video-captions"))
        .and(body_json(json!({ "url": VIDEO_URL, "languages": ["en", "de"] })))
        .respond_with(ResponseTemplate::new(200).set_body_string("We're no strangers to love"))
        .expect(1)
        .mount(&server)
        .await;

    let languages = vec!["en".to_string(), "de".to_string()];
    let captions = client_for(&server)
        .video_captions(VIDEO_URL, &languages)
        .await
        .unwrap();
    assert_eq!(captions, "We're no strangers to love");
}

#[tokio::test]
async fn captions_omit_empty_languages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtube/video-captions"))
        .and(body_json(json!({ "url": VIDEO_URL })))
        .respond_with(ResponseTemplate::new(200).set_body_string("text"))
        .expect(1)
        .mount(&server)
        .await;

    let captions = client_for(&server)
        .video_captions(VIDEO_URL, &[])
        .await
        .unwrap();
    assert_eq!(captions, "text");
}

#[tokio::test]
async fn timestamps_return_entries() {
    let server = MockServer::start().await;
    let entries = json!(["0:00 - We're no strangers to love", "0:04 - You know the rules"]);

    Mock::given(method("POST"))
        .and(path("/youtube/video-timestamps"))
        .and(body_json(json!({ "url": VIDEO_URL, "languages": ["en"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries))
        .expect(1)
        .mount(&server)
        .await;

    let languages = vec!["en".to_string()];
    let timestamps = client_for(&server)
        .video_timestamps(VIDEO_URL, &languages)
        .await
        .unwrap();
    assert_eq!(timestamps.len(), 2);
    assert_eq!(timestamps[1], json!("0:04 - You know the rules"));
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtube/video-data"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "not found" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .video_data("https://invalid-url.com")
        .await
        .unwrap_err();

    match &err {
        ClientError::Status { endpoint, status } => {
            assert_eq!(*endpoint, ApiEndpoint::VideoData);
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(err.to_string(), "/youtube/video-data returned 404 Not Found");
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let client = ApiClient::new(ApiClientOptions {
        base_url: "http://127.0.0.1:1".into(),
        timeout: Some(Duration::from_secs(5)),
        ..Default::default()
    })
    .unwrap();

    let err = client.video_data(VIDEO_URL).await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)), "{err:?}");
}

#[tokio::test]
async fn non_json_body_is_a_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtube/video-timestamps"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .video_timestamps(VIDEO_URL, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Request(_)), "{err:?}");
}
