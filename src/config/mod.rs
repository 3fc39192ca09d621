//! Configuration: TOML file, defaults and a shared store.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, FeedConfig, UiConfig, DEFAULT_FEED_URL};
