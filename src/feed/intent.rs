//! Intents for the section feed.

use crate::model::Section;
use crate::mvi::Intent;

/// Actions a presentation layer can send to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    /// Start a fetch. Accepted from every phase; from `Error` it is a retry.
    Load,
}

/// Intents processed by [`FeedReducer`](super::FeedReducer).
#[derive(Debug, Clone)]
pub enum FeedIntent {
    /// A load was issued. The reducer assigns the next ticket.
    LoadRequested,

    /// A fetch finished.
    Completed {
        /// Ticket the load was issued with.
        ticket: u64,
        /// Decoded sections, or the diagnostic message on failure.
        outcome: Result<Vec<Section>, String>,
    },
}

impl Intent for FeedIntent {}
