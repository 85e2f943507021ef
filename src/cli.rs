//! CLI parser
use clap::Parser;
use std::num::NonZeroU16;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::constants::{DEFAULT_GITHUB_API_URL, DEFAULT_INSTAGRAM_URL};

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "PROFILECARD_DEBUG")]
    /// Enable debug logging. Env: PROFILECARD_DEBUG
    pub debug: bool,
    #[clap(long, short, default_value = "8080", env = "PORT")]
    /// http listener, defaults to `8080`.
    /// Env: PORT
    pub port: NonZeroU16,
    #[clap(long, short, default_value = "0.0.0.0", env = "PROFILECARD_LISTEN_ADDRESS")]
    /// Listen address, defaults to `0.0.0.0`.
    /// Env: PROFILECARD_LISTEN_ADDRESS
    pub listen_address: String,
    #[clap(long, short, default_value = "fonts", env = "PROFILECARD_FONT_DIR")]
    /// Directory holding `user-name.ttf`, `other-content.ttf` and `post-script.ttf`.
    /// Env: PROFILECARD_FONT_DIR
    pub font_dir: PathBuf,
    #[clap(long, short, default_value = "10", env = "PROFILECARD_UPSTREAM_TIMEOUT")]
    /// Seconds an upstream request may take, `0` waits forever.
    /// Env: PROFILECARD_UPSTREAM_TIMEOUT
    pub upstream_timeout: u64,
    #[clap(long, short, env = "PROFILECARD_SEED")]
    /// Fixed seed for the background colour, random per request when unset.
    /// Env: PROFILECARD_SEED
    pub seed: Option<u64>,
    #[clap(long, default_value = DEFAULT_GITHUB_API_URL, env = "PROFILECARD_GITHUB_API_URL")]
    /// Base URL of the GitHub API.
    /// Env: PROFILECARD_GITHUB_API_URL
    pub github_api_url: Url,
    #[clap(long, default_value = DEFAULT_INSTAGRAM_URL, env = "PROFILECARD_INSTAGRAM_URL")]
    /// Base URL of Instagram profile pages.
    /// Env: PROFILECARD_INSTAGRAM_URL
    pub instagram_url: Url,
}

impl CliOptions {
    /// The upstream timeout, `None` when disabled.
    pub fn upstream_timeout(&self) -> Option<Duration> {
        match self.upstream_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
