//! Maps a scraping API payload into [`Profile`] records.

use common::{Contact, Profile};
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

/// Extracts the first decimal number from strings like `"$45.00/hr"` or `"4.9 of 5"`.
///
/// Grouped thousands (`"1,200"`) keep their magnitude; a lone comma followed
/// by digits (`"4,8"`) is read as a decimal separator.
fn extract_number(raw: &str) -> Option<f64> {
    let re = Regex::new(r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?)|(\d+(?:[.,]\d+)?)").ok()?;
    let caps = re.captures(raw)?;

    if let Some(grouped) = caps.get(1) {
        return grouped.as_str().replace(',', "").parse::<f64>().ok();
    }
    caps.get(2)?.as_str().replace(',', ".").parse::<f64>().ok()
}

fn number_field(item: &Map<String, Value>, key: &str) -> Option<f64> {
    match item.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => extract_number(s),
        _ => None,
    }
}

fn string_field(item: &Map<String, Value>, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_string)
}

fn skills_field(item: &Map<String, Value>) -> Vec<String> {
    match item.get("skills") {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(list)) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn to_profile(item: &Map<String, Value>) -> Profile {
    let name = string_field(item, "name").unwrap_or_default();
    let mut parts = name.split_whitespace();
    let first_name = parts.next().unwrap_or_default().to_string();
    let last_name = parts.collect::<Vec<_>>().join(" ");

    // An empty summary counts as missing.
    let bio = string_field(item, "summary")
        .filter(|s| !s.is_empty())
        .or_else(|| string_field(item, "headline"))
        .unwrap_or_default();

    Profile {
        first_name,
        last_name,
        contact: Contact {
            email: string_field(item, "email"),
            phone: string_field(item, "phone"),
            upwork: string_field(item, "profile_url"),
        },
        skills: skills_field(item),
        bio,
        job_title: string_field(item, "title").unwrap_or_default(),
        location: string_field(item, "location").unwrap_or_default(),
        hourly_rate: number_field(item, "hourly_rate"),
        rating: number_field(item, "rating"),
    }
}

/// Normalizes the `results` list of an API payload.
///
/// Returns `None` when the payload is not an object, has no `results` array,
/// or the array produces no profiles. Entries that are not JSON objects are
/// skipped.
pub fn normalize_profiles(payload: &Value) -> Option<Vec<Profile>> {
    let results = payload.as_object()?.get("results")?.as_array()?;

    let profiles: Vec<Profile> = results
        .iter()
        .filter_map(|entry| match entry.as_object() {
            Some(item) => Some(to_profile(item)),
            None => {
                debug!("skipping non-object result entry");
                None
            }
        })
        .collect();

    debug!(count = profiles.len(), "normalized API results");
    if profiles.is_empty() {
        None
    } else {
        Some(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_entry() {
        let payload = json!({"results":[{"name":"Jane Doe","skills":["x"],"hourly_rate":40}]});
        let profiles = normalize_profiles(&payload).unwrap();

        assert_eq!(profiles.len(), 1);
        let jane = &profiles[0];
        assert_eq!(jane.first_name, "Jane");
        assert_eq!(jane.last_name, "Doe");
        assert_eq!(jane.skills, vec!["x".to_string()]);
        assert_eq!(jane.hourly_rate, Some(40.0));
        assert_eq!(jane.contact, Contact::default());
        assert_eq!(jane.rating, None);
        assert_eq!(jane.bio, "");
        assert_eq!(jane.job_title, "");
    }

    #[test]
    fn test_full_entry() {
        let payload = json!({"results":[{
            "name": "  Ana  Maria   Lopez ",
            "email": "ana@example.com",
            "phone": "+34 600 000 000",
            "profile_url": "https://www.upwork.com/freelancers/~01",
            "skills": ["rust", " tokio ", ""],
            "summary": "Systems engineer",
            "headline": "Rustacean",
            "title": "Backend Developer",
            "location": "Madrid",
            "hourly_rate": "$55.50/hr",
            "rating": 4.9
        }]});
        let profile = &normalize_profiles(&payload).unwrap()[0];

        assert_eq!(profile.first_name, "Ana");
        assert_eq!(profile.last_name, "Maria Lopez");
        assert_eq!(profile.contact.email.as_deref(), Some("ana@example.com"));
        assert_eq!(profile.contact.phone.as_deref(), Some("+34 600 000 000"));
        assert_eq!(
            profile.contact.upwork.as_deref(),
            Some("https://www.upwork.com/freelancers/~01")
        );
        assert_eq!(profile.skills, vec!["rust".to_string(), "tokio".to_string()]);
        assert_eq!(profile.bio, "Systems engineer");
        assert_eq!(profile.job_title, "Backend Developer");
        assert_eq!(profile.location, "Madrid");
        assert_eq!(profile.hourly_rate, Some(55.5));
        assert_eq!(profile.rating, Some(4.9));
    }

    #[test]
    fn test_headline_used_when_summary_empty() {
        let payload = json!({"results":[{"name":"Solo","summary":"","headline":"Go expert"}]});
        let profile = &normalize_profiles(&payload).unwrap()[0];
        assert_eq!(profile.bio, "Go expert");
        assert_eq!(profile.first_name, "Solo");
        assert_eq!(profile.last_name, "");
    }

    #[test]
    fn test_comma_separated_skills() {
        let payload = json!({"results":[{"skills":"python, django ,,sql"}]});
        let profile = &normalize_profiles(&payload).unwrap()[0];
        assert_eq!(profile.skills, vec!["python", "django", "sql"]);
    }

    #[test]
    fn test_wrongly_typed_fields_default() {
        let payload = json!({"results":[{"name":42,"email":true,"rating":"n/a","hourly_rate":null}]});
        let profile = &normalize_profiles(&payload).unwrap()[0];
        assert_eq!(profile.first_name, "");
        assert_eq!(profile.contact.email, None);
        assert_eq!(profile.rating, None);
        assert_eq!(profile.hourly_rate, None);
    }

    #[test]
    fn test_empty_results_is_none() {
        assert!(normalize_profiles(&json!({"results": []})).is_none());
    }

    #[test]
    fn test_missing_results_is_none() {
        assert!(normalize_profiles(&json!({"data": [{"name": "x"}]})).is_none());
        assert!(normalize_profiles(&json!([{"name": "x"}])).is_none());
        assert!(normalize_profiles(&json!({"results": "nope"})).is_none());
    }

    #[test]
    fn test_non_object_entries_skipped() {
        assert!(normalize_profiles(&json!({"results": [1, "two", null]})).is_none());

        let payload = json!({"results": ["junk", {"name": "Kim Lee"}]});
        let profiles = normalize_profiles(&payload).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].last_name, "Lee");
    }

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number("$45.00/hr"), Some(45.0));
        assert_eq!(extract_number("4,8"), Some(4.8));
        assert_eq!(extract_number("120"), Some(120.0));
        assert_eq!(extract_number("$1,200/hr"), Some(1200.0));
        assert_eq!(extract_number("$1,000.00"), Some(1000.0));
        assert_eq!(extract_number("12,345,678"), Some(12_345_678.0));
        assert_eq!(extract_number("Negotiable"), None);
    }
}
