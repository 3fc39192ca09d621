//! Terminal presentation of the section feed.
//!
//! Renders each section as a header line over a horizontally scrolling row
//! of item cards, with a spinner while loading and an error banner on
//! failure. The feed itself lives in [`crate::feed`]; this module only
//! consumes its state and render requests.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
