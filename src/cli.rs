//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::model::ImageScale;

/// Browse a sectioned JSON feed in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "sectionfeed", version, about)]
pub struct Cli {
    /// Path to config file (default: <config dir>/sectionfeed/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the feed URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Override the request timeout in seconds (0 disables it)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Image variant to show: 1x, 2x or 3x
    #[arg(long, value_name = "SCALE")]
    pub scale: Option<ImageScale>,

    /// Load once, print the sections and exit
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Config file to read, honouring `--config`.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.feed.url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.feed.timeout_seconds = timeout;
        }
        if let Some(scale) = self.scale {
            config.ui.image_scale = scale;
        }
    }
}
