use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use youtube_transcriptor::{ClientOption, RapidApiError, RateLimiter, TranscriptClient, TranscriptRequest};

fn client_for(server: &MockServer) -> TranscriptClient {
    TranscriptClient::new("test-key", [ClientOption::base_url(server.uri())]).unwrap()
}

fn sample_body() -> serde_json::Value {
    json!({
        "title": "Sample video",
        "description": "A short description",
        "availableLangs": ["en", "es"],
        "lengthInSeconds": "12",
        "thumbnails": [
            {"url": "https://i.ytimg.com/vi/abc123/default.jpg", "width": 120, "height": 90}
        ],
        "transcription": [
            {"subtitle": "Hello", "start": 0.0, "dur": 1.5},
            {"subtitle": "world", "start": 1.5, "dur": 2.0}
        ]
    })
}

#[tokio::test]
async fn test_get_transcript_decodes_response() {
    let server = MockServer::start().await;
    let host = server.address().to_string();

    Mock::given(method("GET"))
        .and(path("/transcript"))
        .and(query_param("video_id", "abc123"))
        .and(query_param("lang", "en"))
        .and(header("X-RapidAPI-Key", "test-key"))
        .and(header("X-RapidAPI-Host", host.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let transcript = client
        .get_transcript("abc123", TranscriptRequest::default())
        .await
        .unwrap();

    assert_eq!(transcript.title, "Sample video");
    assert_eq!(transcript.description, "A short description");
    assert_eq!(transcript.available_langs, vec!["en", "es"]);
    assert_eq!(transcript.length_in_seconds, "12");
    assert_eq!(transcript.thumbnails.len(), 1);
    assert_eq!(transcript.segments.len(), 2);
    assert_eq!(transcript.segments[1].end(), 3.5);
    assert_eq!(transcript.full_text(), "Hello world");
}

#[tokio::test]
async fn test_get_transcript_exact_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transcript"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .get_transcript("abc123", TranscriptRequest::default().with_lang("es"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("video_id=abc123&lang=es"));
}

#[tokio::test]
async fn test_get_transcript_without_segments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Silent film",
            "transcription": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let transcript = client
        .get_transcript("silent", TranscriptRequest::default())
        .await
        .unwrap();

    assert_eq!(transcript.title, "Silent film");
    assert!(transcript.segments.is_empty());
    assert_eq!(transcript.full_text(), "");
}

#[tokio::test]
async fn test_get_transcript_non_ok_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("transcript not available"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .get_transcript("missing", TranscriptRequest::default())
        .await;

    match result {
        Err(RapidApiError::HttpStatus { status, body }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "transcript not available");
        }
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_transcript_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lengthInSeconds": 213})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .get_transcript("abc123", TranscriptRequest::default())
        .await;

    assert!(matches!(result, Err(RapidApiError::Decode(_))));
}

#[tokio::test]
async fn test_get_transcript_connection_refused() {
    let client = TranscriptClient::new("test-key", [ClientOption::base_url("http://127.0.0.1:1")]).unwrap();

    let result = client
        .get_transcript("abc123", TranscriptRequest::default())
        .await;

    assert!(matches!(result, Err(RapidApiError::Execution(_))));
}

#[tokio::test]
async fn test_clients_sharing_a_limiter_share_its_budget() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(4)
        .mount(&server)
        .await;

    let limiter = RateLimiter::new(10, Duration::from_secs(1));
    let first = TranscriptClient::new(
        "test-key",
        [ClientOption::base_url(server.uri()), ClientOption::rate_limit(limiter.clone())],
    )
    .unwrap();
    let second = TranscriptClient::new(
        "test-key",
        [ClientOption::base_url(server.uri()), ClientOption::rate_limit(limiter)],
    )
    .unwrap();

    let start = Instant::now();
    for _ in 0..2 {
        first.get_transcript("a", TranscriptRequest::default()).await.unwrap();
        second.get_transcript("b", TranscriptRequest::default()).await.unwrap();
    }

    // Four requests through one 10/s budget need three intervals
    assert!(start.elapsed() >= Duration::from_millis(300));
}
