use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Tag taxonomy
// =============================================================================

/// A tag from the fixed, closed event taxonomy.
///
/// Serialized as the exact taxonomy string (casing and spacing included),
/// e.g. `Tag::AiMl` <-> `"AI/ML"`, `Tag::SocialService` <-> `"social service"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "art")]
    Art,
    #[serde(rename = "coding")]
    Coding,
    #[serde(rename = "cultural")]
    Cultural,
    #[serde(rename = "cybersecurity")]
    Cybersecurity,
    #[serde(rename = "dance")]
    Dance,
    #[serde(rename = "design")]
    Design,
    #[serde(rename = "drama")]
    Drama,
    #[serde(rename = "electronics")]
    Electronics,
    #[serde(rename = "entrepreneurship")]
    Entrepreneurship,
    #[serde(rename = "finance")]
    Finance,
    #[serde(rename = "gaming")]
    Gaming,
    #[serde(rename = "literature")]
    Literature,
    #[serde(rename = "marketing")]
    Marketing,
    #[serde(rename = "music")]
    Music,
    #[serde(rename = "photography")]
    Photography,
    #[serde(rename = "robotics")]
    Robotics,
    #[serde(rename = "social service")]
    SocialService,
    #[serde(rename = "sports")]
    Sports,
    #[serde(rename = "tech")]
    Tech,
    #[serde(rename = "theatre")]
    Theatre,
}

impl Tag {
    /// Every tag in taxonomy order.
    pub const ALL: [Tag; 21] = [
        Tag::AiMl,
        Tag::Art,
        Tag::Coding,
        Tag::Cultural,
        Tag::Cybersecurity,
        Tag::Dance,
        Tag::Design,
        Tag::Drama,
        Tag::Electronics,
        Tag::Entrepreneurship,
        Tag::Finance,
        Tag::Gaming,
        Tag::Literature,
        Tag::Marketing,
        Tag::Music,
        Tag::Photography,
        Tag::Robotics,
        Tag::SocialService,
        Tag::Sports,
        Tag::Tech,
        Tag::Theatre,
    ];

    /// The exact taxonomy string for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::AiMl => "AI/ML",
            Tag::Art => "art",
            Tag::Coding => "coding",
            Tag::Cultural => "cultural",
            Tag::Cybersecurity => "cybersecurity",
            Tag::Dance => "dance",
            Tag::Design => "design",
            Tag::Drama => "drama",
            Tag::Electronics => "electronics",
            Tag::Entrepreneurship => "entrepreneurship",
            Tag::Finance => "finance",
            Tag::Gaming => "gaming",
            Tag::Literature => "literature",
            Tag::Marketing => "marketing",
            Tag::Music => "music",
            Tag::Photography => "photography",
            Tag::Robotics => "robotics",
            Tag::SocialService => "social service",
            Tag::Sports => "sports",
            Tag::Tech => "tech",
            Tag::Theatre => "theatre",
        }
    }

    /// The whole taxonomy joined with `", "`, in taxonomy order.
    pub fn taxonomy_list() -> String {
        Tag::ALL
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    /// Exact, case-sensitive match against the taxonomy strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("Unknown tag: {}", s))
    }
}

// =============================================================================
// Events
// =============================================================================

/// Client-supplied event fields, used by create, update and classify-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInput {
    pub title: String,
    /// Free-form date string; never parsed or validated.
    pub date: String,
    pub desc: String,
}

/// A stored event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub desc: String,
    pub tags: Vec<Tag>,
}

impl Event {
    /// Build a record from its input fields, an assigned id and computed tags.
    pub fn from_input(id: u64, input: EventInput, tags: Vec<Tag>) -> Self {
        Self {
            id,
            title: input.title,
            date: input.date,
            desc: input.desc,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_taxonomy_has_21_unique_tags() {
        let mut names: Vec<&str> = Tag::ALL.iter().map(Tag::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 21);
    }

    #[test]
    fn test_tag_from_str_exact_match() {
        assert_eq!(Tag::from_str("AI/ML").unwrap(), Tag::AiMl);
        assert_eq!(Tag::from_str("social service").unwrap(), Tag::SocialService);
        assert_eq!(Tag::from_str("theatre").unwrap(), Tag::Theatre);
    }

    #[test]
    fn test_tag_from_str_is_case_sensitive() {
        assert!(Tag::from_str("Tech").is_err());
        assert!(Tag::from_str("ai/ml").is_err());
        assert!(Tag::from_str("theater").is_err());
        assert!(Tag::from_str(" tech").is_err());
    }

    #[test]
    fn test_tag_serde_uses_taxonomy_strings() {
        let json = serde_json::to_string(&vec![Tag::AiMl, Tag::SocialService]).unwrap();
        assert_eq!(json, r#"["AI/ML","social service"]"#);

        let back: Vec<Tag> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Tag::AiMl, Tag::SocialService]);
    }

    #[test]
    fn test_serde_agrees_with_as_str() {
        for tag in Tag::ALL {
            let json = serde_json::to_value(tag).unwrap();
            assert_eq!(json.as_str(), Some(tag.as_str()));
        }
    }

    #[test]
    fn test_taxonomy_list_format() {
        let list = Tag::taxonomy_list();
        assert!(list.starts_with("AI/ML, art, coding, cultural"));
        assert!(list.ends_with("sports, tech, theatre"));
    }

    #[test]
    fn test_event_wire_shape() {
        let event = Event::from_input(
            7,
            EventInput {
                title: "Robo Wars".to_string(),
                date: "2025-03-01".to_string(),
                desc: "Battle bots".to_string(),
            },
            vec![Tag::Robotics],
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "title": "Robo Wars",
                "date": "2025-03-01",
                "desc": "Battle bots",
                "tags": ["robotics"]
            })
        );
    }
}
