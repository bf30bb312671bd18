//! Content records decoded from the five JSON documents.
//!
//! Nothing upstream enforces a schema, so every field tolerates absence and
//! list fields skip entries that fail to decode instead of rejecting the
//! whole document.

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Decodes a JSON array entry by entry, dropping entries that do not fit `T`.
/// Returns `None` when `value` is not an array.
pub fn decode_list<T: DeserializeOwned>(value: &Value) -> Option<Vec<T>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    debug!("Skipping malformed entry: {e}");
                    None
                }
            })
            .collect(),
    )
}

/// `deserialize_with` adapter for optional lenient lists.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decode_list))
}

/// Accepts a string array, dropping non-string entries.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default())
}

/// Keeps a number or string exactly as the document wrote it, so counts such
/// as `"50+"` survive decoding. Any other value decodes as empty.
fn number_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        _ => String::new(),
    })
}

/// Accepts a number or a numeric string (`"85"`, `"85%"`); anything else is 0.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn optional_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = string_list(deserializer)?;
    Ok(if list.is_empty() { None } else { Some(list) })
}

// ────────────────────────────────────────────────────────────────────────────
// resume.json
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    pub title: String,
    #[serde(alias = "organization", alias = "institution")]
    pub company: Option<String>,
    pub date: String,
    pub location: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(deserialize_with = "lenient_number")]
    pub level: f64,
}

impl Skill {
    /// Proficiency as a whole percentage in 0..=100.
    pub fn percent(&self) -> u8 {
        if self.level.is_finite() {
            self.level.round().clamp(0.0, 100.0) as u8
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    #[serde(deserialize_with = "lenient_list")]
    pub experience: Option<Vec<TimelineEntry>>,
    #[serde(deserialize_with = "lenient_list")]
    pub education: Option<Vec<TimelineEntry>>,
    #[serde(deserialize_with = "lenient_list")]
    pub technical_skills: Option<Vec<Skill>>,
    #[serde(deserialize_with = "lenient_list")]
    pub tools_skills: Option<Vec<Skill>>,
}

// ────────────────────────────────────────────────────────────────────────────
// projects.json
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanionApp {
    pub label: Option<String>,
    pub name: String,
    pub description: String,
    pub playstore_url: Option<String>,
    pub appstore_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub full_title: Option<String>,
    pub category: String,
    pub category_label: String,
    pub image: String,
    pub description: String,
    #[serde(deserialize_with = "string_list")]
    pub tech: Vec<String>,
    #[serde(deserialize_with = "optional_string_list")]
    pub highlights: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub appstore_url: Option<String>,
    pub playstore_url: Option<String>,
    pub companion_app: Option<CompanionApp>,
}

impl Project {
    pub fn display_title(&self) -> &str {
        self.full_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.title)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// blog.json
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub category: String,
    pub date: String,
    pub date_formatted: Option<String>,
    pub excerpt: String,
    pub image: String,
    pub url: Option<String>,
}

impl BlogPost {
    /// The human-readable date; derived from the ISO `date` when the document
    /// does not carry one.
    pub fn display_date(&self) -> String {
        if let Some(formatted) = self.date_formatted.as_deref().filter(|s| !s.is_empty()) {
            return formatted.to_string();
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map(|d| d.format("%b %d, %Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// about.json
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Stat {
    /// As written; the counter parses its leading integer when it animates.
    #[serde(deserialize_with = "number_text")]
    pub count: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutService {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    #[serde(deserialize_with = "optional_string_list")]
    pub about_text: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_list")]
    pub stats: Option<Vec<Stat>>,
    #[serde(deserialize_with = "lenient_list")]
    pub services: Option<Vec<AboutService>>,
    #[serde(deserialize_with = "lenient_list")]
    pub testimonials: Option<Vec<Testimonial>>,
}

// ────────────────────────────────────────────────────────────────────────────
// services.json
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessService {
    pub title: String,
    pub tagline: String,
    pub outcome: String,
    #[serde(deserialize_with = "string_list")]
    pub deliverables: Vec<String>,
    pub timeline: String,
    #[serde(deserialize_with = "string_list")]
    pub tech_tags: Vec<String>,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_list_rejects_non_array() {
        assert!(decode_list::<Project>(&json!({"id": "a"})).is_none());
    }

    #[test]
    fn test_decode_list_skips_malformed_entries() {
        let projects: Vec<Project> =
            decode_list(&json!([{"id": "a", "title": "A"}, "garbage", {"id": "b"}])).unwrap();
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_project_optional_fields_absent() {
        let p: Project = serde_json::from_value(json!({
            "id": "a", "title": "A", "category": "mobile", "tech": ["Kotlin", 3, "Room"]
        }))
        .unwrap();
        assert_eq!(p.tech, vec!["Kotlin", "Room"]);
        assert!(p.highlights.is_none());
        assert!(p.companion_app.is_none());
        assert_eq!(p.display_title(), "A");
    }

    #[test]
    fn test_empty_highlights_become_none() {
        let p: Project = serde_json::from_value(json!({"id": "a", "highlights": []})).unwrap();
        assert!(p.highlights.is_none());
    }

    #[test]
    fn test_resume_tolerates_bad_section_shape() {
        let r: Resume = serde_json::from_value(json!({
            "experience": "not a list",
            "technicalSkills": [{"name": "Rust", "level": 140}]
        }))
        .unwrap();
        assert!(r.experience.is_none());
        assert_eq!(r.technical_skills.unwrap()[0].percent(), 100);
    }

    #[test]
    fn test_stat_count_keeps_non_integer_values() {
        let about: About = serde_json::from_value(json!({
            "stats": [
                {"count": 90, "label": "Projects"},
                {"count": 90.0, "label": "Clients"},
                {"count": "50+", "label": "Apps"},
                {"label": "Awards"}
            ]
        }))
        .unwrap();
        let stats = about.stats.unwrap();
        let counts: Vec<&str> = stats.iter().map(|s| s.count.as_str()).collect();
        assert_eq!(counts, vec!["90", "90", "50+", ""]);
        assert_eq!(stats[3].label, "Awards");
    }

    #[test]
    fn test_skill_level_accepts_numeric_strings() {
        let r: Resume = serde_json::from_value(json!({
            "toolsSkills": [
                {"name": "Git", "level": "85%"},
                {"name": "Docker", "level": 72.6},
                {"name": "Figma", "level": "high"}
            ]
        }))
        .unwrap();
        let levels: Vec<u8> = r.tools_skills.unwrap().iter().map(Skill::percent).collect();
        assert_eq!(levels, vec![85, 73, 0]);
    }

    #[test]
    fn test_timeline_entry_accepts_organization_alias() {
        let e: TimelineEntry =
            serde_json::from_value(json!({"title": "BSc", "institution": "KUET"})).unwrap();
        assert_eq!(e.company.as_deref(), Some("KUET"));
    }

    #[test]
    fn test_blog_display_date_falls_back_to_iso_date() {
        let post = BlogPost {
            date: "2025-03-09".into(),
            ..Default::default()
        };
        assert_eq!(post.display_date(), "Mar 09, 2025");

        let post = BlogPost {
            date: "2025-03-09".into(),
            date_formatted: Some("March 9".into()),
            ..Default::default()
        };
        assert_eq!(post.display_date(), "March 9");
    }
}
