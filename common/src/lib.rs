//! Shared data types for the talent finder.
//!
//! Everything here is plain data with serde derives so that search outcomes
//! can be printed, kept in the session history and written to disk as JSON.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Message stored alongside every fallback outcome.
pub const FALLBACK_MESSAGE: &str = "Using Upwork URL instead";

/// Contact details of a freelancer. Every field is optional.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Marketplace profile URL.
    pub upwork: Option<String>,
}

/// A freelancer record normalized from the scraping API payload.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub contact: Contact,
    pub skills: Vec<String>,
    pub bio: String,
    pub job_title: String,
    pub location: String,
    pub hourly_rate: Option<f64>,
    pub rating: Option<f64>,
}

impl Profile {
    /// First and last name joined for display, without stray spaces.
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (false, false) => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Result of a single search: structured profiles or a browsable URL.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchOutcome {
    Success {
        count: usize,
        profiles: Vec<Profile>,
    },
    Fallback {
        message: String,
        #[serde(rename = "upwork_url")]
        url: String,
    },
}

impl SearchOutcome {
    pub fn success(profiles: Vec<Profile>) -> Self {
        SearchOutcome::Success {
            count: profiles.len(),
            profiles,
        }
    }

    pub fn fallback(url: impl Into<String>) -> Self {
        SearchOutcome::Fallback {
            message: FALLBACK_MESSAGE.to_string(),
            url: url.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SearchOutcome::Fallback { .. })
    }

    /// Profiles carried by the outcome; empty for a fallback.
    pub fn profiles(&self) -> &[Profile] {
        match self {
            SearchOutcome::Success { profiles, .. } => profiles,
            SearchOutcome::Fallback { .. } => &[],
        }
    }

    pub fn fallback_url(&self) -> Option<&str> {
        match self {
            SearchOutcome::Success { .. } => None,
            SearchOutcome::Fallback { url, .. } => Some(url),
        }
    }
}

/// One entry of the in-memory search history.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchRecord {
    /// `search-<n>`, numbered from 1 within a session.
    pub id: String,
    pub timestamp: DateTime<Local>,
    pub job_title: String,
    pub location: String,
    pub skills: Vec<String>,
    pub outcome: SearchOutcome,
}

/// Append-only list of the searches run in this process.
#[derive(Debug, Default)]
pub struct SearchHistory {
    records: Vec<SearchRecord>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record with the next sequence id and returns it.
    pub fn record(
        &mut self,
        job_title: &str,
        location: &str,
        skills: &[String],
        outcome: SearchOutcome,
    ) -> &SearchRecord {
        let record = SearchRecord {
            id: format!("search-{}", self.records.len() + 1),
            timestamp: Local::now(),
            job_title: job_title.to_string(),
            location: location.to_string(),
            skills: skills.to_vec(),
            outcome,
        };
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&SearchRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchRecord> {
        self.records.iter()
    }
}
