//! Search orchestration: remote call first, browsable URL as fallback.

use common::{Profile, SearchHistory, SearchOutcome};
use tracing::{debug, info, warn};

use crate::config::{ApiKeyStatus, FinderConfig};
use crate::error::{FinderError, SoftFailure};
use crate::normalize::normalize_profiles;
use crate::remote::{ProfileSource, ScrapeDoClient};
use crate::url_builder::{build_search_url, UrlMode};

pub const DEFAULT_LOCATION: &str = "Remote";

/// Validated search criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub job_title: String,
    pub location: String,
    pub skills: Vec<String>,
}

impl SearchRequest {
    /// Trims every field, defaults a blank location to `Remote` and drops
    /// blank skills.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::EmptyJobTitle`] if the job title is blank.
    pub fn new(job_title: &str, location: &str, skills: &[String]) -> Result<Self, FinderError> {
        let job_title = job_title.trim();
        if job_title.is_empty() {
            return Err(FinderError::EmptyJobTitle);
        }

        let location = match location.trim() {
            "" => DEFAULT_LOCATION,
            other => other,
        };

        Ok(Self {
            job_title: job_title.to_string(),
            location: location.to_string(),
            skills: skills
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Runs searches and keeps the session history.
pub struct Finder {
    source: Option<Box<dyn ProfileSource>>,
    history: SearchHistory,
    last_api_failure: Option<SoftFailure>,
}

impl Finder {
    /// `None` disables the remote call; every search then falls back.
    pub fn new(source: Option<Box<dyn ProfileSource>>) -> Self {
        Self {
            source,
            history: SearchHistory::new(),
            last_api_failure: None,
        }
    }

    /// Builds a finder backed by Scrape.do when a usable key is configured.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Client`] if the HTTP client cannot be built.
    pub fn from_config(config: &FinderConfig) -> Result<Self, FinderError> {
        let source: Option<Box<dyn ProfileSource>> = match config.api_key_status() {
            ApiKeyStatus::Configured(token) => Some(Box::new(ScrapeDoClient::new(config, token)?)),
            ApiKeyStatus::Placeholder | ApiKeyStatus::Missing => None,
        };
        Ok(Self::new(source))
    }

    pub fn api_enabled(&self) -> bool {
        self.source.is_some()
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Why the most recent search could not use the API, if it tried.
    pub fn last_api_failure(&self) -> Option<&SoftFailure> {
        self.last_api_failure.as_ref()
    }

    /// Runs one search and records it in the history.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::EmptyJobTitle`] if the job title is blank.
    /// Remote failures never surface here; they produce a fallback outcome.
    pub fn search(
        &mut self,
        job_title: &str,
        location: &str,
        skills: &[String],
    ) -> Result<SearchOutcome, FinderError> {
        let request = SearchRequest::new(job_title, location, skills)?;
        info!(
            search = self.history.len() + 1,
            job_title = %request.job_title,
            location = %request.location,
            "starting search"
        );

        self.last_api_failure = None;
        let profiles = match self.source.as_deref() {
            Some(source) => match fetch_profiles(source, &request) {
                Ok(profiles) => Some(profiles),
                Err(reason) => {
                    warn!(%reason, "API search failed; using Upwork URL");
                    self.last_api_failure = Some(reason);
                    None
                }
            },
            None => {
                debug!("API disabled; skipping remote call");
                None
            }
        };

        let outcome = match profiles {
            Some(profiles) => SearchOutcome::success(profiles),
            None => SearchOutcome::fallback(build_search_url(
                &request.job_title,
                &request.location,
                &request.skills,
                UrlMode::Browse,
            )),
        };

        self.history.record(
            &request.job_title,
            &request.location,
            &request.skills,
            outcome.clone(),
        );
        Ok(outcome)
    }
}

fn fetch_profiles(source: &dyn ProfileSource, request: &SearchRequest) -> Result<Vec<Profile>, SoftFailure> {
    let target = build_search_url(
        &request.job_title,
        &request.location,
        &request.skills,
        UrlMode::Api,
    );
    let payload = source.fetch(&target)?;
    normalize_profiles(&payload).ok_or(SoftFailure::Empty)
}
