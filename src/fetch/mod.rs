//! Section fetching.
//!
//! A [`SectionSource`] turns a URL into an ordered list of sections. The
//! free functions here wrap it in the absence-signal contract: every
//! failure collapses into `None` plus a log line.

mod client;
mod error;

pub use client::HttpSectionSource;
pub use error::FetchError;

use std::sync::Arc;

use futures_core::future::BoxFuture;
use tokio::task::JoinHandle;

use crate::model::Section;

/// Anything that can produce the section list for a URL.
pub trait SectionSource: Send + Sync + 'static {
    /// Fetch and decode the sections at `url`.
    fn fetch_sections<'a>(&'a self, url: &'a str)
        -> BoxFuture<'a, Result<Vec<Section>, FetchError>>;
}

/// Fetch sections, reporting any failure as absence.
pub async fn fetch_or_absent<S>(source: &S, url: &str) -> Option<Vec<Section>>
where
    S: SectionSource + ?Sized,
{
    match source.fetch_sections(url).await {
        Ok(sections) => Some(sections),
        Err(err) => {
            tracing::warn!(
                url = %url,
                kind = err.kind(),
                error = %err,
                "Failed to fetch sections"
            );
            None
        }
    }
}

/// Run a fetch on a background task and hand the outcome to `on_complete`.
///
/// The callback runs exactly once, on the worker task. Callers that touch
/// shared state must hop back to their own context themselves.
pub fn spawn_fetch<F>(source: Arc<dyn SectionSource>, url: String, on_complete: F) -> JoinHandle<()>
where
    F: FnOnce(Option<Vec<Section>>) + Send + 'static,
{
    tokio::spawn(async move {
        let outcome = fetch_or_absent(source.as_ref(), &url).await;
        on_complete(outcome);
    })
}
