//! Printing and saving search outcomes.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use common::{Profile, SearchOutcome};
use tracing::{info, warn};

use crate::error::FinderError;

/// Number of profiles printed for a successful search.
pub const DISPLAY_LIMIT: usize = 3;

/// Result of writing an outcome to disk.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveReport {
    Saved { path: PathBuf },
    Failed { path: PathBuf, reason: String },
}

impl SaveReport {
    pub fn path(&self) -> &Path {
        match self {
            SaveReport::Saved { path } | SaveReport::Failed { path, .. } => path,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SaveReport::Saved { .. })
    }

    /// One line for the user.
    pub fn message(&self) -> String {
        match self {
            SaveReport::Saved { path } => format!("💾 Results saved to {}", path.display()),
            SaveReport::Failed { reason, .. } => format!("⚠️ Could not save results: {}", reason),
        }
    }
}

fn or_na(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn profile_lines(profile: &Profile) -> Vec<String> {
    vec![
        String::new(),
        format!("👤 {}", profile.full_name()),
        format!("💼 {}", profile.job_title),
        format!("💰 Hourly Rate: {}", or_na(profile.hourly_rate)),
        format!("⭐ Rating: {}", or_na(profile.rating)),
        format!("📍 {}", profile.location),
        format!("🛠️ Skills: {}", profile.skills.join(", ")),
    ]
}

/// Lines printed for an outcome, excluding any follow-up prompt.
pub fn outcome_lines(outcome: &SearchOutcome) -> Vec<String> {
    match outcome {
        SearchOutcome::Success { count, profiles } => {
            let mut lines = vec![String::new(), format!("✅ Found {} profiles:", count)];
            for profile in profiles.iter().take(DISPLAY_LIMIT) {
                lines.extend(profile_lines(profile));
            }
            lines
        }
        SearchOutcome::Fallback { url, .. } => {
            vec![String::new(), "🔗 Upwork Search URL:".to_string(), url.clone()]
        }
    }
}

/// `search_results_<YYYYMMDD_HHMMSS>.json`
pub fn results_filename(at: &DateTime<Local>) -> String {
    format!("search_results_{}.json", at.format("%Y%m%d_%H%M%S"))
}

/// Path for a results file; `-<search_id>` is appended when the plain
/// timestamped name is already taken.
pub fn results_path(dir: &Path, at: &DateTime<Local>, search_id: &str) -> PathBuf {
    let path = dir.join(results_filename(at));
    if !path.exists() || search_id.is_empty() {
        return path;
    }
    dir.join(format!(
        "search_results_{}-{}.json",
        at.format("%Y%m%d_%H%M%S"),
        search_id
    ))
}

/// Writes the outcome as pretty JSON into `dir`, named after the current time.
pub fn save_outcome(outcome: &SearchOutcome, dir: &Path, search_id: &str) -> SaveReport {
    save_outcome_at(outcome, dir, &Local::now(), search_id)
}

pub fn save_outcome_at(
    outcome: &SearchOutcome,
    dir: &Path,
    at: &DateTime<Local>,
    search_id: &str,
) -> SaveReport {
    let path = results_path(dir, at, search_id);

    let written = serde_json::to_string_pretty(outcome)
        .map_err(|e| FinderError::from(e).to_string())
        .and_then(|json| fs::write(&path, json).map_err(|e| e.to_string()));

    match written {
        Ok(()) => {
            info!(path = %path.display(), "results saved");
            SaveReport::Saved { path }
        }
        Err(reason) => {
            warn!(path = %path.display(), %reason, "could not save results");
            SaveReport::Failed { path, reason }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile(first: &str, rate: Option<f64>) -> Profile {
        Profile {
            first_name: first.into(),
            last_name: "Smith".into(),
            job_title: "Rust Engineer".into(),
            location: "Remote".into(),
            skills: vec!["rust".into(), "wasm".into()],
            hourly_rate: rate,
            ..Default::default()
        }
    }

    #[test]
    fn test_success_lines_show_at_most_three_profiles() {
        let profiles = ["A", "B", "C", "D"].iter().map(|n| profile(n, Some(40.0))).collect();
        let text = outcome_lines(&SearchOutcome::success(profiles)).join("\n");

        assert!(text.contains("✅ Found 4 profiles:"));
        assert!(text.contains("👤 C Smith"));
        assert!(!text.contains("👤 D Smith"));
        assert!(text.contains("💰 Hourly Rate: 40"));
        assert!(text.contains("⭐ Rating: N/A"));
        assert!(text.contains("🛠️ Skills: rust, wasm"));
    }

    #[test]
    fn test_fallback_lines_show_url() {
        let lines = outcome_lines(&SearchOutcome::fallback("https://www.upwork.com/nx"));
        assert_eq!(lines.last().map(String::as_str), Some("https://www.upwork.com/nx"));
    }

    #[test]
    fn test_results_filename_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(results_filename(&at), "search_results_20240309_070501.json");
    }

    #[test]
    fn test_save_writes_full_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = SearchOutcome::success(vec![profile("Jane", None)]);

        let report = save_outcome(&outcome, dir.path(), "search-1");

        assert!(report.is_saved());
        assert!(report.message().starts_with("💾 Results saved to"));
        let saved: SearchOutcome =
            serde_json::from_str(&fs::read_to_string(report.path()).unwrap()).unwrap();
        assert_eq!(saved, outcome);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let report = save_outcome(&SearchOutcome::fallback("u"), &missing, "search-1");

        match &report {
            SaveReport::Failed { path, reason } => {
                assert!(path.starts_with(&missing));
                assert!(!reason.is_empty());
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(report.message().starts_with("⚠️ Could not save results:"));
    }

    #[test]
    fn test_same_second_saves_do_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();

        let first = save_outcome_at(&SearchOutcome::fallback("a"), dir.path(), &at, "search-1");
        let second = save_outcome_at(&SearchOutcome::fallback("b"), dir.path(), &at, "search-2");

        assert_eq!(first.path(), dir.path().join("search_results_20240309_070501.json"));
        assert_eq!(
            second.path(),
            dir.path().join("search_results_20240309_070501-search-2.json")
        );
        let kept: SearchOutcome =
            serde_json::from_str(&fs::read_to_string(first.path()).unwrap()).unwrap();
        assert_eq!(kept.fallback_url(), Some("a"));
    }
}
