//! Upwork talent search URL construction.

use urlencoding::encode;

const UPWORK_SEARCH_BASE: &str = "https://www.upwork.com/nx/search/talent/";

/// Filters appended for a person browsing the results directly.
const BROWSE_FILTERS: &[(&str, &str)] = &[
    ("hourly_rate", "10-200"),
    ("profile_type", "independent"),
];

/// Who the URL is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlMode {
    /// Target handed to the scraping proxy; no extra filters.
    Api,
    /// Fallback URL opened by a person; rate and freelancer filters added.
    Browse,
}

/// Builds the talent search URL for a job title, location and skills.
///
/// The job title and skills are joined with spaces into the `q` parameter.
/// Both `q` and `location` are percent-encoded.
pub fn build_search_url(job_title: &str, location: &str, skills: &[String], mode: UrlMode) -> String {
    let keywords = std::iter::once(job_title)
        .chain(skills.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");

    let mut url = format!(
        "{}?q={}&location={}",
        UPWORK_SEARCH_BASE,
        encode(&keywords),
        encode(location)
    );

    if mode == UrlMode::Browse {
        for (key, value) in BROWSE_FILTERS {
            url.push_str(&format!("&{}={}", key, value));
        }
    }
    url
}
