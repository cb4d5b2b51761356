//! Runtime configuration for the finder.
//!
//! [`FinderConfig`] is built once at startup from the command line (see
//! `main.rs`) and handed to the components that need it. The API key state
//! is reported through [`ApiKeyStatus`] rather than inferred later.

use std::path::PathBuf;

use crate::error::FinderError;

/// Scrape.do proxy endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.scrape.do";

/// Key shipped in the original script as a stand-in for a real token.
pub const PLACEHOLDER_API_KEY: &str = "915b9665536748328a8c091c9b125a2b0b3235b73a3";

/// State of the configured Scrape.do token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyStatus<'a> {
    Configured(&'a str),
    /// The shipped placeholder was supplied; the API would reject it.
    Placeholder,
    Missing,
}

impl ApiKeyStatus<'_> {
    pub fn is_usable(&self) -> bool {
        matches!(self, ApiKeyStatus::Configured(_))
    }
}

#[derive(Debug, Clone)]
pub struct FinderConfig {
    pub api_key: Option<String>,
    /// Base URL of the scraping proxy.
    pub endpoint: String,
    /// HTTP timeout; also forwarded to the proxy in milliseconds.
    pub timeout_secs: u64,
    /// Ask the proxy to render JavaScript before returning.
    pub render: bool,
    /// Where `search_results_*.json` files are written.
    pub output_dir: PathBuf,
    /// Offer to open fallback URLs in the system browser.
    pub open_browser: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            render: true,
            output_dir: PathBuf::from("."),
            open_browser: true,
        }
    }
}

impl FinderConfig {
    pub fn api_key_status(&self) -> ApiKeyStatus<'_> {
        match self.api_key.as_deref().map(str::trim) {
            None | Some("") => ApiKeyStatus::Missing,
            Some(key) if key.contains(PLACEHOLDER_API_KEY) => ApiKeyStatus::Placeholder,
            Some(key) => ApiKeyStatus::Configured(key),
        }
    }

    /// Proxy-side timeout in milliseconds.
    pub fn proxy_timeout_ms(&self) -> u64 {
        self.timeout_secs.saturating_mul(1000)
    }

    /// Checks:
    /// - `timeout_secs` must be greater than 0
    /// - `endpoint` must be an http(s) URL
    /// - `output_dir` must be an existing directory
    pub fn validate(&self) -> Result<(), FinderError> {
        if self.timeout_secs == 0 {
            return Err(FinderError::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(FinderError::Config(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if !self.output_dir.is_dir() {
            return Err(FinderError::Config(format!(
                "output directory {} does not exist",
                self.output_dir.display()
            )));
        }
        Ok(())
    }
}
