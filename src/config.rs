//! Client configuration parsed from environment variables.

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_API_URL.to_owned(), timeouts: Timeouts::default() }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `TASKDECK_API_URL`: default `http://127.0.0.1:3000`
    /// - `TASKDECK_REQUEST_TIMEOUT_SECS`: default 30
    /// - `TASKDECK_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// Unparseable timeouts fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let api_url = std::env::var("TASKDECK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let timeouts = Timeouts {
            request_secs: env_parse_u64("TASKDECK_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("TASKDECK_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Self::default().with_api_url(&api_url).with_timeouts(timeouts)
    }

    /// Replace the base URL, dropping any trailing `/`.
    #[must_use]
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim().trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Absolute URL for an API path such as `/lists`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
