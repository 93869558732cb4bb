//! Portfolio case study types

use serde::{Deserialize, Serialize};

/// A pre-authored portfolio case study
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub sub_title: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "projectTags")]
    pub tags: Vec<String>,
    #[serde(rename = "projectCost")]
    pub cost: String,
    #[serde(rename = "projectTimeline")]
    pub timeline: String,
    #[serde(rename = "projectQuantity")]
    pub quantity: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub pieces_created: Option<String>,
    pub challenge: Challenge,
    #[serde(rename = "projectQuote")]
    pub quote: ProjectQuote,
}

/// The problem the project solved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// May contain inline HTML markup
    pub description: String,
    pub quote: ChallengeQuote,
}

impl Challenge {
    /// The description with markup tags removed
    pub fn plain_description(&self) -> String {
        strip_tags(&self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeQuote {
    pub quote: String,
    pub role: String,
}

/// Client testimonial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectQuote {
    pub quote: String,
    pub role: String,
    pub company: String,
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("Deliver <strong>350 sets</strong> <em>fast</em>"),
            "Deliver 350 sets fast"
        );
        assert_eq!(strip_tags("no markup"), "no markup");
        assert_eq!(strip_tags("a > b"), "a > b");
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let json = r#"{
            "id": "9",
            "subTitle": "s",
            "title": "t",
            "description": "d",
            "image": "i",
            "projectTags": [],
            "projectCost": "c",
            "projectTimeline": "tl",
            "projectQuantity": "q",
            "challenge": {"description": "cd", "quote": {"quote": "q", "role": "r"}},
            "projectQuote": {"quote": "q", "role": "r", "company": "c"}
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.id, "9");
        assert!(project.client.is_none());
        assert!(project.outcome.is_none());
        assert!(project.pieces_created.is_none());
    }
}
