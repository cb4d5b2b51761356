//! Error types for the finder.
//!
//! [`FinderError`] covers the few conditions that stop an operation.
//! [`SoftFailure`] describes why the remote call produced nothing usable;
//! it never aborts a search, the orchestrator falls back to a browsable URL.

use thiserror::Error;

/// Errors that stop a finder operation.
#[derive(Debug, Error)]
pub enum FinderError {
    /// Invalid configuration detected at startup.
    #[error("config error: {0}")]
    Config(String),

    /// A search was requested with a blank job title.
    #[error("job title must not be empty")]
    EmptyJobTitle,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// A search outcome could not be serialized for saving.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reasons a remote call degrades to the fallback path.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SoftFailure {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("received HTML instead of JSON")]
    HtmlContent {
        /// `<title>` of the returned page, when it has one.
        page_title: Option<String>,
    },

    #[error("API request failed with status {status}")]
    Status { status: u16, snippet: String },

    #[error("failed to decode JSON response: {reason}")]
    Decode { reason: String, snippet: String },

    #[error("no profiles in API response")]
    Empty,
}

pub type Result<T> = std::result::Result<T, FinderError>;
