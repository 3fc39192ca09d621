//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_feed;

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures_core::future::BoxFuture;
use parking_lot::Mutex;
use sectionfeed::feed::{FeedPhase, FeedState, FeedStore};
use sectionfeed::fetch::{FetchError, SectionSource};
use sectionfeed::model::{Image, Item, Payload, Section};
use tempfile::TempDir;

/// Single section, single item feed document.
pub const SAMPLE_PAYLOAD: &str = r#"{"sections":[{"id":"s1","header":"Top","itemsTotal":2,"itemsToShow":2,"items":[{"id":"i1","image":{"1x":"a","2x":"b","3x":"c"},"title":"Foo"}]}]}"#;

/// Two sections that reuse the same item id.
pub const SHARED_ID_PAYLOAD: &str = r#"{
  "sections": [
    {
      "id": "new",
      "header": "New releases",
      "itemsTotal": 10,
      "itemsToShow": 2,
      "items": [
        {"id": "a", "image": {"1x": "a1", "2x": "a2", "3x": "a3", "aspectRatio": 2}, "title": "Alpha"},
        {"id": "b", "image": {"1x": "b1", "2x": "b2", "3x": "b3", "loopAnimation": true}, "title": "Beta"}
      ]
    },
    {
      "id": "popular",
      "header": "Popular",
      "itemsTotal": 1,
      "itemsToShow": 1,
      "items": [
        {"id": "a", "image": {"1x": "a1", "2x": "a2", "3x": "a3"}, "title": "Alpha again"}
      ]
    }
  ]
}"#;

pub fn sample_sections() -> Vec<Section> {
    Payload::from_slice(SAMPLE_PAYLOAD.as_bytes())
        .expect("sample payload decodes")
        .into_sections()
}

pub fn item(id: &str, title: &str) -> Item {
    Item {
        id: id.to_string(),
        image: Image {
            x1: format!("{id}@1x"),
            x2: format!("{id}@2x"),
            x3: format!("{id}@3x"),
            aspect_ratio: None,
            loop_animation: None,
        },
        title: title.to_string(),
    }
}

pub fn section(id: &str, items: Vec<Item>) -> Section {
    Section {
        id: id.to_string(),
        header: id.to_uppercase(),
        items_total: items.len() as i64,
        items_to_show: items.len() as i64,
        items,
    }
}

// -- Scripted source ----------------------------------------------------------

/// One scripted reply of a [`StubSource`].
#[derive(Debug, Clone)]
pub enum StubReply {
    Sections(Vec<Section>),
    Fail(u16),
    /// Never resolves.
    Hang,
    /// Panics inside the fetch future.
    Panic,
}

/// In-memory section source that replays queued replies in order.
///
/// When the queue is empty every fetch fails with status 404.
#[derive(Default)]
pub struct StubSource {
    replies: Mutex<VecDeque<(StubReply, Duration)>>,
    calls: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: StubReply) -> &Self {
        self.push_delayed(reply, Duration::ZERO)
    }

    pub fn push_delayed(&self, reply: StubReply, delay: Duration) -> &Self {
        self.replies.lock().push_back((reply, delay));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl SectionSource for StubSource {
    fn fetch_sections<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Section>, FetchError>> {
        self.calls.lock().push(url.to_string());
        let next = self.replies.lock().pop_front();
        Box::pin(async move {
            let (reply, delay) = next.unwrap_or((StubReply::Fail(404), Duration::ZERO));
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            match reply {
                StubReply::Sections(sections) => Ok(sections),
                StubReply::Fail(status) => Err(FetchError::Status {
                    url: url.to_string(),
                    status,
                }),
                StubReply::Hang => std::future::pending().await,
                StubReply::Panic => panic!("stub source panicked for {}", url),
            }
        })
    }
}

// -- Store helpers ------------------------------------------------------------

/// Phase labels observed by a recording subscriber.
pub type PhaseLog = Arc<Mutex<Vec<String>>>;

pub fn phase_label(phase: &FeedPhase) -> String {
    match phase {
        FeedPhase::Initial => "initial".to_string(),
        FeedPhase::Loading => "loading".to_string(),
        FeedPhase::Loaded => "loaded".to_string(),
        FeedPhase::Error(_) => "error".to_string(),
    }
}

/// Subscribe a recorder and return the shared log, seeded with the current phase.
pub fn record_phases(store: &mut FeedStore) -> PhaseLog {
    let log: PhaseLog = Arc::new(Mutex::new(vec![phase_label(store.state().phase())]));
    let sink = Arc::clone(&log);
    store.subscribe(move |state: &FeedState| {
        sink.lock().push(phase_label(state.phase()));
    });
    log
}

// -- Config helpers -----------------------------------------------------------

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
