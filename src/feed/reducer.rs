//! Reducer for the section feed.

use crate::mvi::Reducer;

use super::intent::FeedIntent;
use super::state::{FeedPhase, FeedState};

/// Reducer for feed state transitions.
///
/// Pure function: spawning the fetch for a new ticket is the store's job.
pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::LoadRequested => FeedState {
                phase: FeedPhase::Loading,
                latest_ticket: state.latest_ticket + 1,
                sections: state.sections,
            },

            FeedIntent::Completed { ticket, outcome } => {
                // Only the latest issued load may resolve the cycle.
                if ticket != state.latest_ticket || !state.is_loading() {
                    return state;
                }
                match outcome {
                    Ok(sections) => FeedState {
                        phase: FeedPhase::Loaded,
                        sections,
                        latest_ticket: state.latest_ticket,
                    },
                    Err(message) => FeedState {
                        phase: FeedPhase::Error(message),
                        ..state
                    },
                }
            }
        }
    }
}
