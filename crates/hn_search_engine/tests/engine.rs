use std::sync::Arc;
use std::time::Duration;

use hn_search_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchMetadata, FetchOutput,
    FetchSettings, Fetcher, RequestId,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn next_event(engine: &EngineHandle) -> EngineEvent {
    for _ in 0..200 {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("engine produced no event within 5s");
}

#[tokio::test]
async fn engine_decodes_successful_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("query", "MicroCODE"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"hits":[{"objectID":"9","title":"Hello","url":"https://hello.example"}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default()).expect("engine");
    engine.enqueue(1, format!("{}/api/v1/search?query=MicroCODE", server.uri()));

    match next_event(&engine).await {
        EngineEvent::SearchCompleted { request_id, result } => {
            assert_eq!(request_id, 1);
            let response = result.expect("search ok");
            assert_eq!(response.hits.len(), 1);
            assert_eq!(response.hits[0].object_id, "9");
        }
    }
}

#[tokio::test]
async fn engine_reports_malformed_body_as_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default()).expect("engine");
    engine.enqueue(4, format!("{}/api/v1/search?query=x", server.uri()));

    match next_event(&engine).await {
        EngineEvent::SearchCompleted { request_id, result } => {
            assert_eq!(request_id, 4);
            assert_eq!(result.unwrap_err().kind, FailureKind::Decode);
        }
    }
}

/// Answers after a per-request delay so completions can overtake each other.
struct DelayedFetcher;

#[async_trait::async_trait]
impl Fetcher for DelayedFetcher {
    async fn fetch(&self, request_id: RequestId, url: &str) -> Result<FetchOutput, FetchError> {
        let delay = if request_id == 1 { 300 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        let bytes = format!(r#"{{"hits":[{{"objectID":"{request_id}"}}]}}"#).into_bytes();
        Ok(FetchOutput {
            metadata: FetchMetadata {
                original_url: url.to_string(),
                final_url: url.to_string(),
                redirect_count: 0,
                content_type: Some("application/json".to_string()),
                byte_len: bytes.len() as u64,
            },
            bytes,
        })
    }
}

#[tokio::test]
async fn engine_runs_requests_concurrently_without_cancelling() {
    let engine = EngineHandle::with_fetcher(Arc::new(DelayedFetcher)).expect("engine");
    engine.enqueue(1, "https://slow.example/search?query=a");
    engine.enqueue(2, "https://fast.example/search?query=b");

    let mut order = Vec::new();
    for _ in 0..2 {
        match next_event(&engine).await {
            EngineEvent::SearchCompleted { request_id, result } => {
                assert!(result.is_ok());
                order.push(request_id);
            }
        }
    }
    assert_eq!(order, vec![2, 1]);
}

#[tokio::test]
async fn engine_decodes_json_served_with_other_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"hits":[{"objectID":"3","title":"Plain","url":null}]}"#,
            "text/plain; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default()).expect("engine");
    engine.enqueue(8, format!("{}/api/v1/search?query=plain", server.uri()));

    match next_event(&engine).await {
        EngineEvent::SearchCompleted { request_id, result } => {
            assert_eq!(request_id, 8);
            assert_eq!(result.expect("search ok").hits[0].object_id, "3");
        }
    }
}
