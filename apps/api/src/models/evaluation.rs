use serde::de::{self, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Lower bound (inclusive) of the `high` tier.
pub const HIGH_TIER_MIN: f64 = 0.75;
/// Lower bound (inclusive) of the `medium` tier.
pub const MEDIUM_TIER_MIN: f64 = 0.40;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// Tier implied by a normalized score: high ≥ 0.75, medium 0.40–0.74, low ≤ 0.39.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_TIER_MIN {
            Tier::High
        } else if score >= MEDIUM_TIER_MIN {
            Tier::Medium
        } else {
            Tier::Low
        }
    }
}

/// Case-insensitive: the model sometimes writes "High".
impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Tier::High),
            "medium" => Ok(Tier::Medium),
            "low" => Ok(Tier::Low),
            _ => Err(de::Error::unknown_variant(&raw, &["high", "medium", "low"])),
        }
    }
}

/// Closed tag vocabulary the model is allowed to choose from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Focused,
    ProjectReady,
    PoorFormatting,
    Incomplete,
    WellPresented,
    GithubPresent,
    Certified,
    InactiveProfile,
    DiverseSkills,
    Academic,
}

impl Tag {
    /// Looks up a tag by name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let deserializer: de::value::StrDeserializer<'_, de::value::Error> =
            name.as_str().into_deserializer();
        Tag::deserialize(deserializer).ok()
    }
}

/// Structured assessment of one resume, decoded from the model's JSON output.
///
/// Field order matches the schema in the evaluation prompt so the serialized
/// record reads the same way the model was asked to write it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationRecord {
    #[serde(default, deserialize_with = "text_or_list")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub experience_summary: Option<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub projects_summary: Option<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub github_or_portfolio_links: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub certifications: Vec<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub participation: Option<String>,
    pub score: f64,
    pub tier: Tier,
    #[serde(default, deserialize_with = "known_tags")]
    pub tags: Vec<Tag>,
}

impl EvaluationRecord {
    /// Checks constraints serde cannot express. Returns a description of the
    /// first violation.
    pub fn validate(&self) -> Result<(), String> {
        if !self.score.is_finite() {
            return Err(format!("score must be a finite number, got {}", self.score));
        }
        if self.score < 0.0 {
            return Err(format!("score must not be negative, got {}", self.score));
        }
        Ok(())
    }

    /// Whether the score lies on the normalized 0.0–1.0 scale. Raw rubric
    /// points can add up past 20, so a score above 1.0 is kept as written.
    pub fn score_is_normalized(&self) -> bool {
        self.score <= 1.0
    }

    /// Whether the model's tier agrees with its own score.
    pub fn tier_matches_score(&self) -> bool {
        Tier::from_score(self.score) == self.tier
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

/// Accepts a string, a list of strings (joined with ", "), or null.
fn text_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrList>::deserialize(deserializer)?;
    let text = match value {
        None => None,
        Some(TextOrList::Text(s)) => Some(s),
        Some(TextOrList::List(items)) => Some(items.join(", ")),
    };
    Ok(text.filter(|s| !s.trim().is_empty()))
}

/// Treats an explicit `null` list as empty.
fn list_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keeps tags from the closed vocabulary and drops the rest.
fn known_tags<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(names
        .iter()
        .filter_map(|name| {
            let tag = Tag::parse(name);
            if tag.is_none() {
                warn!("Dropping tag outside the vocabulary: {name:?}");
            }
            tag
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(score: f64, tier: &str) -> String {
        format!(
            r#"{{
                "name": "Asha Rao",
                "education": "B.Tech CSE, IIT Madras",
                "experience_summary": null,
                "skills": ["Rust", "Distributed Systems"],
                "projects_summary": "Built a log-structured KV store",
                "github_or_portfolio_links": ["https://github.com/asharao"],
                "certifications": null,
                "participation": ["ACM chapter", "Smart India Hackathon"],
                "score": {score},
                "tier": "{tier}",
                "tags": ["focused", "github_present"]
            }}"#
        )
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::from_score(0.80), Tier::High);
        assert_eq!(Tier::from_score(0.75), Tier::High);
        assert_eq!(Tier::from_score(0.74), Tier::Medium);
        assert_eq!(Tier::from_score(0.50), Tier::Medium);
        assert_eq!(Tier::from_score(0.40), Tier::Medium);
        assert_eq!(Tier::from_score(0.39), Tier::Low);
        assert_eq!(Tier::from_score(0.20), Tier::Low);
        assert_eq!(Tier::from_score(0.0), Tier::Low);
    }

    #[test]
    fn test_decode_lenient_fields() {
        let record: EvaluationRecord = serde_json::from_str(&record_json(0.8, "high")).unwrap();
        assert_eq!(record.experience_summary, None);
        assert!(record.certifications.is_empty());
        assert_eq!(
            record.participation.as_deref(),
            Some("ACM chapter, Smart India Hackathon")
        );
        assert_eq!(record.tags, vec![Tag::Focused, Tag::GithubPresent]);
        assert!(record.validate().is_ok());
        assert!(record.tier_matches_score());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let record: EvaluationRecord =
            serde_json::from_str(r#"{"score": 0.2, "tier": "low"}"#).unwrap();
        assert_eq!(record.name, None);
        assert!(record.skills.is_empty());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_unknown_tag_dropped() {
        let json = r#"{"score": 0.5, "tier": "medium", "tags": ["rockstar", "Certified", "academic"]}"#;
        let record: EvaluationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tags, vec![Tag::Certified, Tag::Academic]);
    }

    #[test]
    fn test_tier_case_insensitive() {
        let json = r#"{"score": 0.8, "tier": "High"}"#;
        let record: EvaluationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tier, Tier::High);

        let json = r#"{"score": 0.5, "tier": " MEDIUM "}"#;
        let record: EvaluationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tier, Tier::Medium);
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let json = r#"{"score": 0.5, "tier": "excellent"}"#;
        assert!(serde_json::from_str::<EvaluationRecord>(json).is_err());
    }

    #[test]
    fn test_score_above_one_is_kept() {
        let record: EvaluationRecord = serde_json::from_str(&record_json(1.25, "high")).unwrap();
        assert!(record.validate().is_ok());
        assert!(!record.score_is_normalized());
        assert!(record.tier_matches_score());
    }

    #[test]
    fn test_negative_score_fails_validation() {
        let record: EvaluationRecord = serde_json::from_str(&record_json(-0.1, "low")).unwrap();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_inconsistent_tier_is_detected_not_corrected() {
        let record: EvaluationRecord = serde_json::from_str(&record_json(0.2, "high")).unwrap();
        assert!(record.validate().is_ok());
        assert!(!record.tier_matches_score());
        assert_eq!(record.tier, Tier::High);
    }

    #[test]
    fn test_serializes_lowercase_enums() {
        let record: EvaluationRecord = serde_json::from_str(&record_json(0.5, "medium")).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["tier"], "medium");
        assert_eq!(value["tags"][1], "github_present");
        assert!(value["experience_summary"].is_null());
    }
}
