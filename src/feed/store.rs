//! Owner of the feed state.
//!
//! Fetches run on spawned tasks. Their completions are queued on a channel
//! and only applied when the owner calls [`FeedStore::next_completion`] or
//! [`FeedStore::drain_completions`], so every mutation and every observer
//! call happens on the owner's context.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::fetch::SectionSource;
use crate::mvi::Reducer;

use super::intent::{FeedAction, FeedIntent};
use super::observers::{ObserverRegistry, SubscriptionId};
use super::reducer::FeedReducer;
use super::state::FeedState;

pub struct FeedStore {
    state: FeedState,
    source: Arc<dyn SectionSource>,
    url: String,
    observers: ObserverRegistry<FeedState>,
    completions_tx: mpsc::UnboundedSender<FeedIntent>,
    completions_rx: mpsc::UnboundedReceiver<FeedIntent>,
    in_flight: usize,
}

impl FeedStore {
    pub fn new(source: Arc<dyn SectionSource>, url: impl Into<String>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: FeedState::default(),
            source,
            url: url.into(),
            observers: ObserverRegistry::new(),
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Change the feed URL used by subsequent loads.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Number of fetches whose completion has not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Register an observer, called after every state change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&FeedState) + Send + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Handle an action from the presentation layer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn send(&mut self, action: FeedAction) {
        match action {
            FeedAction::Load => {
                self.dispatch(FeedIntent::LoadRequested);
                self.spawn_load(self.state.latest_ticket());
            }
        }
    }

    /// Wait for the next fetch to finish and apply it.
    ///
    /// Returns false immediately when nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.completions_rx.recv().await {
            Some(intent) => {
                self.in_flight -= 1;
                self.dispatch(intent);
                true
            }
            None => false,
        }
    }

    /// Apply every completion that has already arrived, without waiting.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.completions_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.dispatch(intent);
            applied += 1;
        }
        applied
    }

    fn dispatch(&mut self, intent: FeedIntent) {
        let stale_ticket = match &intent {
            FeedIntent::Completed { ticket, .. } if *ticket != self.state.latest_ticket() => {
                Some(*ticket)
            }
            _ => None,
        };
        if let Some(ticket) = stale_ticket {
            tracing::debug!(
                ticket,
                latest = self.state.latest_ticket(),
                "Discarding completion of superseded load"
            );
        }

        let before = self.state.clone();
        self.state = FeedReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state == before {
            return;
        }

        tracing::debug!(
            from = ?before.phase(),
            to = ?self.state.phase(),
            ticket = self.state.latest_ticket(),
            sections = self.state.sections().len(),
            "Feed state changed"
        );
        self.observers.notify(&self.state);
    }

    /// Run the fetch for `ticket` on its own task.
    ///
    /// A supervising task awaits it, so every issued ticket sends exactly one
    /// completion even when the fetch panics or is cancelled.
    fn spawn_load(&mut self, ticket: u64) {
        let source = Arc::clone(&self.source);
        let url = self.url.clone();
        let completions = self.completions_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let fetch_url = url.clone();
            let fetch = tokio::spawn(async move { source.fetch_sections(&fetch_url).await });

            let outcome = match fetch.await {
                Ok(Ok(sections)) => Ok(sections),
                Ok(Err(err)) => {
                    tracing::warn!(
                        url = %url,
                        ticket,
                        kind = err.kind(),
                        error = %err,
                        "Failed to fetch sections"
                    );
                    Err(err.to_string())
                }
                Err(join_err) => {
                    tracing::error!(
                        url = %url,
                        ticket,
                        error = %join_err,
                        "Fetch task did not complete"
                    );
                    Err(format!("Fetch task failed: {}", join_err))
                }
            };

            if completions.send(FeedIntent::Completed { ticket, outcome }).is_err() {
                tracing::trace!(ticket, "Feed store dropped before fetch completed");
            }
        });
    }
}
