//! Upwork talent finder.
//!
//! Asks the Scrape.do proxy for freelancer profiles matching a job title,
//! location and skills. When the proxy cannot deliver (no key, network
//! error, blocked page, bad JSON, no results) the search falls back to a
//! browsable Upwork search URL. Every outcome is printed and saved as JSON.

pub mod browser;
pub mod config;
pub mod console;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod remote;
pub mod report;
pub mod session;
pub mod url_builder;

pub use browser::{BrowserOpener, SystemBrowser};
pub use config::{ApiKeyStatus, FinderConfig};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::{FinderError, Result, SoftFailure};
pub use orchestrator::{Finder, SearchRequest};
pub use remote::{ProfileSource, ScrapeDoClient};
pub use report::SaveReport;
pub use session::{run_session, SessionOptions};
