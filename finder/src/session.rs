//! Interactive search loop.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::browser::BrowserOpener;
use crate::console::Console;
use crate::error::Result;
use crate::orchestrator::Finder;
use crate::report::{outcome_lines, save_outcome};

pub const BANNER: &str = r#"
    ====================================
     ENHANCED PROFESSIONAL FINDER (UPWORK)
    ------------------------------------
     Searches for freelancers with:
     - Name/Contact Info
     - Skills
     - Hourly Rate
     - Ratings
    ===================================="#;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub output_dir: PathBuf,
    /// Offer to open fallback URLs in the browser.
    pub open_browser: bool,
}

fn is_yes(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y"))
}

/// Splits a comma separated answer into trimmed, non-empty skills.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prompts for searches until the user quits or input ends.
///
/// Returns the number of searches run.
///
/// # Errors
///
/// Only console I/O failures end the session with an error.
pub fn run_session<C, B>(
    finder: &mut Finder,
    console: &mut C,
    browser: &B,
    options: &SessionOptions,
) -> Result<usize>
where
    C: Console + ?Sized,
    B: BrowserOpener + ?Sized,
{
    let mut searches = 0;

    loop {
        console.print("\nEnter search criteria (or 'quit' to exit):")?;
        let Some(job_title) = console.prompt("Job title/skill: ")? else {
            break;
        };
        let job_title = job_title.trim().to_string();
        if job_title.eq_ignore_ascii_case("quit") {
            break;
        }
        if job_title.is_empty() {
            console.print("⚠️ A job title is required.")?;
            continue;
        }

        let Some(location) = console.prompt("Location [Remote]: ")? else {
            break;
        };
        let Some(skills) = console.prompt("Skills (comma separated): ")? else {
            break;
        };
        let skills = parse_skills(&skills);

        console.print(&format!("\n🔎 Starting search #{}...", searches + 1))?;
        let outcome = finder.search(&job_title, &location, &skills)?;
        searches += 1;

        if let Some(reason) = finder.last_api_failure() {
            console.print(&format!("⚠️ API request failed: {}", reason))?;
        }
        for line in outcome_lines(&outcome) {
            console.print(&line)?;
        }

        if let Some(url) = outcome.fallback_url() {
            if options.open_browser {
                console.print("\nWould you like to open this in your browser?")?;
                if is_yes(console.prompt("(y/n): ")?.as_deref()) {
                    if let Err(e) = browser.open(url) {
                        warn!(error = %e, "failed to open browser");
                        console.print(&format!("⚠️ Could not open browser: {}", e))?;
                    }
                }
            }
        }

        let search_id = finder
            .history()
            .last()
            .map(|record| record.id.clone())
            .unwrap_or_default();
        let report = save_outcome(&outcome, &options.output_dir, &search_id);
        console.print(&format!("\n{}", report.message()))?;

        console.print("\nWould you like to run another search?")?;
        if !is_yes(console.prompt("(y/n): ")?.as_deref()) {
            break;
        }
    }

    debug!(searches, "session finished");
    Ok(searches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills() {
        assert_eq!(parse_skills(" rust, ,tokio ,"), vec!["rust", "tokio"]);
        assert!(parse_skills("").is_empty());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes(Some("y")));
        assert!(is_yes(Some(" Y ")));
        assert!(!is_yes(Some("yes")));
        assert!(!is_yes(Some("")));
        assert!(!is_yes(None));
    }
}
