//! Scrape.do adapter.
//!
//! Sends a single blocking GET to the proxy and classifies the reply. Every
//! problem is returned as a [`SoftFailure`] so the caller can fall back to a
//! browsable URL; nothing here is retried.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::FinderConfig;
use crate::error::{FinderError, SoftFailure};

const SNIPPET_CHARS: usize = 200;

/// Source of raw profile payloads for a target search URL.
pub trait ProfileSource {
    fn fetch(&self, target_url: &str) -> Result<Value, SoftFailure>;
}

/// Blocking client for the Scrape.do proxy.
#[derive(Debug)]
pub struct ScrapeDoClient {
    client: Client,
    endpoint: String,
    token: String,
    render: bool,
    proxy_timeout_ms: u64,
}

impl ScrapeDoClient {
    /// # Errors
    ///
    /// Returns [`FinderError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &FinderConfig, token: &str) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FinderError::Client(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: token.to_string(),
            render: config.render,
            proxy_timeout_ms: config.proxy_timeout_ms(),
        })
    }
}

impl ProfileSource for ScrapeDoClient {
    fn fetch(&self, target_url: &str) -> Result<Value, SoftFailure> {
        info!(target_url, "attempting API connection");

        let render = if self.render { "true" } else { "false" };
        let timeout = self.proxy_timeout_ms.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("token", self.token.as_str()),
                ("url", target_url),
                ("render", render),
                ("timeout", timeout.as_str()),
            ])
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| SoftFailure::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        debug!(status, content_type = %content_type, "API response received");

        let body = response
            .text()
            .map_err(|e| SoftFailure::Transport(format!("failed to read response body: {e}")))?;

        classify_response(status, &content_type, &body)
    }
}

/// Turns a raw proxy reply into a JSON payload or a [`SoftFailure`].
///
/// An HTML content type is rejected before the status is looked at.
pub fn classify_response(status: u16, content_type: &str, body: &str) -> Result<Value, SoftFailure> {
    if content_type.to_lowercase().contains("html") {
        let page_title = html_title(body);
        warn!(
            page_title = page_title.as_deref().unwrap_or("<none>"),
            "received HTML instead of JSON; the endpoint may have changed, a CAPTCHA may be blocking, or the plan may not allow this request"
        );
        return Err(SoftFailure::HtmlContent { page_title });
    }

    if status != 200 {
        let snippet = snippet(body);
        warn!(status, body = %snippet, "API request failed");
        return Err(SoftFailure::Status { status, snippet });
    }

    serde_json::from_str(body).map_err(|e| {
        let snippet = snippet(body);
        warn!(error = %e, body = %snippet, "failed to decode JSON response");
        SoftFailure::Decode {
            reason: e.to_string(),
            snippet,
        }
    })
}

fn snippet(body: &str) -> String {
    body.chars().take(SNIPPET_CHARS).collect()
}

fn html_title(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}
