//! Section feed view-state machine.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Lifecycle phase and loaded sections
//! - `intent.rs` - Public actions and internal completion intents
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `store.rs` - Owner of the state: spawns fetches, applies completions,
//!   notifies observers
//! - `snapshot.rs` - Keyed render snapshot consumed by presentation adapters
//!
//! ```text
//! Initial ──Load──→ Loading ──Completed(Ok)──→ Loaded
//!                      │  ↑                       │
//!          Completed(Err) └──────────Load─────────┘
//!                      ↓  ↑
//!                    Error ──Load──┘
//! ```

mod intent;
mod observers;
mod reducer;
mod snapshot;
mod state;
mod store;

pub use intent::{FeedAction, FeedIntent};
pub use observers::{ObserverRegistry, SubscriptionId};
pub use reducer::FeedReducer;
pub use snapshot::{ItemKey, ItemRenderData, RenderRequest, Snapshot, SnapshotDiff, SnapshotSection};
pub use state::{FeedPhase, FeedState, Presentation};
pub use store::FeedStore;
