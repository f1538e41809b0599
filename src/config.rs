use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.midjourneyapi.io/v2";

#[derive(Debug, Clone)]
pub struct MidjourneyConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Treat non-2xx responses as `ApiError` instead of decoding the body.
    pub strict_status: bool,
}

impl Default for MidjourneyConfig {
    fn default() -> Self {
        MidjourneyConfig {
            api_key: None,
            base_url: None,
            timeout_secs: None,
            strict_status: false,
        }
    }
}

impl MidjourneyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("MIDJOURNEY_API_KEY").ok();
        let base_url = env::var("MIDJOURNEY_BASE_URL").ok();
        let timeout_secs = env::var("MIDJOURNEY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());
        let strict_status = env::var("MIDJOURNEY_STRICT_STATUS")
            .ok()
            .map_or(false, |val| val == "true");

        MidjourneyConfig {
            api_key,
            base_url,
            timeout_secs,
            strict_status,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_strict_status(mut self, enabled: bool) -> Self {
        self.strict_status = enabled;
        self
    }

    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
