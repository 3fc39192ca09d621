mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use common::mock_feed::{MockFeed, MockResponse};
use common::{StubReply, StubSource, SAMPLE_PAYLOAD};
use sectionfeed::fetch::{fetch_or_absent, spawn_fetch, FetchError, HttpSectionSource, SectionSource};
use sectionfeed::model::Section;
use tokio::sync::oneshot;

fn source() -> HttpSectionSource {
    HttpSectionSource::new(Duration::from_secs(2), Some(Duration::from_secs(5))).unwrap()
}

/// Run `spawn_fetch` and return how often the callback ran and what it got.
async fn spawn_and_collect(
    source: Arc<dyn SectionSource>,
    url: &str,
) -> (usize, Option<Vec<Section>>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = oneshot::channel();

    let counter = Arc::clone(&calls);
    let handle = spawn_fetch(source, url.to_string(), move |outcome| {
        counter.fetch_add(1, Ordering::SeqCst);
        let _ = tx.send(outcome);
    });

    let outcome = rx.await.expect("callback never invoked");
    handle.await.unwrap();
    (calls.load(Ordering::SeqCst), outcome)
}

#[tokio::test]
async fn test_success_returns_sections_in_order() {
    let feed = MockFeed::start().await;
    feed.enqueue_response(MockResponse::json(SAMPLE_PAYLOAD)).await;

    let sections = source().fetch_sections(&feed.feed_url()).await.unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].id, "s1");
    assert_eq!(sections[0].items[0].id, "i1");

    let requests = feed.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/sections.json");
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let feed = MockFeed::start().await;
    feed.enqueue_response(MockResponse::error(500, "boom")).await;

    let err = source().fetch_sections(&feed.feed_url()).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_server_error_collapses_to_absence() {
    let feed = MockFeed::start().await;
    feed.enqueue_response(MockResponse::error(503, "unavailable")).await;

    assert!(fetch_or_absent(&source(), &feed.feed_url()).await.is_none());
}

#[tokio::test]
async fn test_malformed_json_collapses_to_absence() {
    let feed = MockFeed::start().await;
    feed.enqueue_response(MockResponse::json(r#"{"sections": [{"id": 1}]}"#))
        .await;

    let err = source().fetch_sections(&feed.feed_url()).await.unwrap_err();
    assert_eq!(err.kind(), "decode_error");

    feed.enqueue_response(MockResponse::json("not json")).await;
    assert!(fetch_or_absent(&source(), &feed.feed_url()).await.is_none());
}

#[tokio::test]
async fn test_malformed_url_invokes_callback_once_with_absence() {
    let (calls, outcome) = spawn_and_collect(Arc::new(source()), "not a url").await;

    assert_eq!(calls, 1);
    assert!(outcome.is_none());
}

#[tokio::test]
async fn test_connection_refused_invokes_callback_once_with_absence() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}/sections.json", port);

    let (calls, outcome) = spawn_and_collect(Arc::new(source()), &url).await;

    assert_eq!(calls, 1);
    assert!(outcome.is_none());
}

#[tokio::test]
async fn test_spawn_fetch_delivers_full_list() {
    let feed = MockFeed::start().await;
    feed.enqueue_response(MockResponse::json(SAMPLE_PAYLOAD)).await;

    let (calls, outcome) = spawn_and_collect(Arc::new(source()), &feed.feed_url()).await;

    assert_eq!(calls, 1);
    let sections = outcome.expect("sections");
    assert_eq!(sections[0].items.len(), 1);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let feed = MockFeed::start().await;
    feed.enqueue_response(MockResponse::json(SAMPLE_PAYLOAD).with_delay(2_000))
        .await;

    let source =
        HttpSectionSource::new(Duration::from_secs(2), Some(Duration::from_millis(100))).unwrap();
    let err = source.fetch_sections(&feed.feed_url()).await.unwrap_err();

    assert!(matches!(err, FetchError::Timeout { duration_ms: 100 }));
}

#[tokio::test]
async fn test_stub_source_failure_is_absence() {
    let stub = StubSource::new();
    stub.push(StubReply::Fail(500));

    assert!(fetch_or_absent(&stub, "http://stub/feed").await.is_none());
    assert_eq!(stub.calls(), vec!["http://stub/feed".to_string()]);
}
