use serde::{Deserialize, Serialize};

use crate::model::ImageScale;

/// Feed URL used when neither the config file nor the CLI provides one.
pub const DEFAULT_FEED_URL: &str = "http://127.0.0.1:8080/sections.json";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where and how the section feed is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Absolute URL of the JSON document.
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// Overall request timeout in seconds; 0 disables it (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/spinner tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Image variant shown for each item (default: "2x").
    #[serde(default)]
    pub image_scale: ImageScale,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            image_scale: ImageScale::default(),
        }
    }
}
