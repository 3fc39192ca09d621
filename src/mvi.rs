//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Observers / View
//!    ↑                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! The feed state machine is written against these traits so that every
//! transition goes through one pure function and can be tested without a
//! runtime.

/// Marker for state values.
///
/// `PartialEq` lets the owner skip notifications when a reduction leaves
/// the state unchanged.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}

/// Marker for user actions and completed background work.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
