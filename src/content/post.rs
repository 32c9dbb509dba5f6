//! Blog post models

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Publication status of a post
///
/// Anything other than `published` is invisible to the public query surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Published,
}

/// A news source cited by a generated post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSource {
    pub title: String,
    pub url: String,
    /// Publication date as written by the authoring pipeline, not parsed
    pub published: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

/// A full blog post as persisted on disk (one JSON file per post)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// URL-friendly identifier; must match the file stem
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date (sole sort key for listings)
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,

    /// Raw markdown body
    pub content: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Cited news sources
    #[serde(default)]
    pub sources: Vec<NewsSource>,

    /// Post tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Author name
    pub author: String,

    /// Publication status
    pub status: Status,

    /// Optional header image URL (unvalidated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Estimated reading time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
}

impl BlogPost {
    /// Project this post to its listing shape, dropping the body and sources
    pub fn summary(&self) -> BlogSummary {
        BlogSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            date: self.date,
            tags: self.tags.clone(),
            reading_time: self.reading_time,
            image_url: self.image_url.clone(),
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }
}

/// Reduced projection of a post used by listing views and the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Deserialize a date that may be a full RFC 3339 timestamp, a naive
/// `YYYY-MM-DD HH:MM:SS` timestamp, or a bare `YYYY-MM-DD` date.
///
/// The authoring pipeline only promises "ISO format" and has emitted all
/// three shapes over time.
fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

/// Parse a date string in any of the accepted shapes
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_json() {
        let json = r###"{
            "slug": "week-of-2025-12-07",
            "title": "Weekly Roundup",
            "date": "2025-12-07",
            "content": "## Headlines\n\nBody text.",
            "excerpt": "This week in the alliance.",
            "sources": [
                {
                    "title": "Source article",
                    "url": "https://example.com/a",
                    "published": "2025-12-05",
                    "summary": "A summary.",
                    "source_name": "Example Wire"
                }
            ],
            "tags": ["economy", "energy"],
            "author": "AES Staff Writer",
            "status": "published",
            "reading_time": 4
        }"###;

        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug, "week-of-2025-12-07");
        assert_eq!(post.status, Status::Published);
        assert_eq!(post.tags, vec!["economy", "energy"]);
        assert_eq!(post.sources.len(), 1);
        assert_eq!(post.sources[0].source_name.as_deref(), Some("Example Wire"));
        assert_eq!(post.reading_time, Some(4));
    }

    #[test]
    fn test_parse_draft_status() {
        let json = r#"{
            "slug": "wip",
            "title": "Unfinished",
            "date": "2025-01-01",
            "content": "",
            "excerpt": "",
            "author": "AES Staff Writer",
            "status": "draft"
        }"#;

        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert!(!post.is_published());
    }

    #[test]
    fn test_parse_date_shapes() {
        assert!(parse_date("2025-12-07").is_some());
        assert!(parse_date("2025-12-07 10:30:00").is_some());
        assert!(parse_date("2025-12-07T10:30:00Z").is_some());
        assert!(parse_date("2025-12-07T10:30:00+01:00").is_some());
        assert!(parse_date("last tuesday").is_none());
    }

    #[test]
    fn test_summary_projection() {
        let json = r#"{
            "slug": "p",
            "title": "T",
            "date": "2025-06-01",
            "content": "large body",
            "excerpt": "short",
            "author": "A",
            "status": "published",
            "tags": ["one"]
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        let summary = post.summary();
        assert_eq!(summary.slug, "p");
        assert_eq!(summary.tags, vec!["one"]);

        // The listing shape must not carry the body or sources
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("content").is_none());
        assert!(value.get("sources").is_none());
    }
}
