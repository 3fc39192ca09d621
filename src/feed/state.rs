//! State for the section feed.

use crate::model::Section;
use crate::mvi::ViewState;

use super::snapshot::{RenderRequest, Snapshot};

/// Lifecycle phase of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedPhase {
    /// Nothing requested yet.
    #[default]
    Initial,

    /// A fetch is in flight.
    Loading,

    /// Sections are available.
    Loaded,

    /// The latest fetch failed.
    Error(String),
}

/// Complete feed state: phase plus the most recently loaded sections.
///
/// Sections survive a reload and a failed reload; only a successful fetch
/// replaces them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    pub(crate) phase: FeedPhase,
    pub(crate) sections: Vec<Section>,
    /// Ticket of the most recently issued load (0 before the first).
    pub(crate) latest_ticket: u64,
}

impl ViewState for FeedState {}

/// What a view should show for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation<'a> {
    pub show_spinner: bool,
    pub show_content: bool,
    pub error: Option<&'a str>,
}

impl FeedState {
    pub fn phase(&self) -> &FeedPhase {
        &self.phase
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn latest_ticket(&self) -> u64 {
        self.latest_ticket
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FeedPhase::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, FeedPhase::Loaded)
    }

    /// Diagnostic message when the latest fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            FeedPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Side effects a view applies on entering the current phase.
    pub fn presentation(&self) -> Presentation<'_> {
        match &self.phase {
            FeedPhase::Initial | FeedPhase::Loading => Presentation {
                show_spinner: true,
                show_content: false,
                error: None,
            },
            FeedPhase::Loaded => Presentation {
                show_spinner: false,
                show_content: true,
                error: None,
            },
            FeedPhase::Error(message) => Presentation {
                show_spinner: false,
                show_content: false,
                error: Some(message),
            },
        }
    }

    /// Keyed snapshot of the current sections.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_sections(&self.sections)
    }

    /// Re-render request, only issued once sections are loaded.
    pub fn render_request(&self) -> Option<RenderRequest> {
        self.is_loaded().then(|| RenderRequest {
            snapshot: self.snapshot(),
            animate: false,
        })
    }
}
