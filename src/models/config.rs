//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for talking to the mentoring backend.
pub struct ApiConfig {
    /// Base URL including any version prefix, e.g. `https://host/mentoring/v1`.
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}
