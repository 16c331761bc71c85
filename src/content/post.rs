//! Blog post model: slug derivation, metadata extraction and date handling

use std::cmp::Ordering;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::frontmatter::{Metadata, ParsedDocument};

/// Markdown file extension recognised as a blog document
pub const MARKDOWN_EXTENSION: &str = "md";

/// Display format for post dates (e.g. `Mar 1, 2025`)
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Post metadata without the body, as shown in the list view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPostSummary {
    pub slug: String,
    pub title: String,
    /// Parsed publication date; `None` when missing or unparsable
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// A fully parsed blog document
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    /// Markdown body, verbatim from the source minus the front-matter block
    pub body: String,
    /// Every front-matter entry, including keys the site does not interpret
    pub metadata: Metadata,
}

impl BlogPost {
    /// Build a post from a parsed document and its slug.
    pub fn from_document(slug: impl Into<String>, doc: ParsedDocument) -> Self {
        let ParsedDocument { metadata, body } = doc;
        Self {
            slug: slug.into(),
            title: metadata.get_str("title").unwrap_or_default(),
            date: metadata.get_str("date").as_deref().and_then(parse_date),
            description: metadata.get_str("description"),
            body,
            metadata,
        }
    }

    /// Metadata view of this post, without the body.
    pub fn summary(&self) -> BlogPostSummary {
        BlogPostSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: self.date,
            description: self.description.clone(),
        }
    }

    pub fn display_date(&self) -> Option<String> {
        self.date.map(format_date)
    }
}

impl BlogPostSummary {
    pub fn display_date(&self) -> Option<String> {
        self.date.map(format_date)
    }
}

/// Derive a slug from a storage path: the file name without `.md`.
///
/// Returns `None` for paths that are not markdown documents.
pub fn slug_for(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if ext != MARKDOWN_EXTENSION {
        return None;
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

/// Parse a front-matter date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Newest-first ordering; undated posts sort after every dated post.
pub fn newest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::frontmatter::parse_document;
    use std::path::PathBuf;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_slug_for_markdown_file() {
        let path = PathBuf::from("/site/posts/hello-world.md");
        assert_eq!(slug_for(&path).as_deref(), Some("hello-world"));
    }

    #[test]
    fn test_slug_keeps_inner_dots() {
        let path = PathBuf::from("posts/v1.2-release.md");
        assert_eq!(slug_for(&path).as_deref(), Some("v1.2-release"));
    }

    #[test]
    fn test_slug_rejects_other_extensions() {
        assert_eq!(slug_for(Path::new("posts/notes.txt")), None);
        assert_eq!(slug_for(Path::new("posts/README")), None);
        assert_eq!(slug_for(Path::new("posts/upper.MD")), None);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-01-01"), Some(date("2024-01-01")));
        assert_eq!(
            parse_date("2023-06-15T08:30:00Z"),
            Some(date("2023-06-15"))
        );
        assert_eq!(
            parse_date("2025-03-01 12:00:00"),
            Some(date("2025-03-01"))
        );
        assert_eq!(parse_date(" 2024-02-29 "), Some(date("2024-02-29")));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2023-02-30"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date("2025-03-01")), "Mar 1, 2025");
        assert_eq!(format_date(date("2023-12-25")), "Dec 25, 2023");
    }

    #[test]
    fn test_newest_first_places_undated_last() {
        let mut dates = vec![
            None,
            Some(date("2023-06-15")),
            Some(date("2025-03-01")),
            None,
            Some(date("2024-01-01")),
        ];
        dates.sort_by(|a, b| newest_first(*a, *b));
        assert_eq!(
            dates,
            vec![
                Some(date("2025-03-01")),
                Some(date("2024-01-01")),
                Some(date("2023-06-15")),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_post_from_document() {
        let doc = parse_document(
            "---\ntitle: First\ndate: 2024-01-01\ndescription: Intro\n---\nHello\n",
        );
        let post = BlogPost::from_document("first", doc);
        assert_eq!(post.slug, "first");
        assert_eq!(post.title, "First");
        assert_eq!(post.date, Some(date("2024-01-01")));
        assert_eq!(post.description.as_deref(), Some("Intro"));
        assert_eq!(post.body, "Hello\n");
        assert_eq!(post.display_date().as_deref(), Some("Jan 1, 2024"));
    }

    #[test]
    fn test_post_without_metadata() {
        let post = BlogPost::from_document("bare", parse_document("no front matter"));
        assert_eq!(post.title, "");
        assert_eq!(post.date, None);
        assert_eq!(post.description, None);
        assert_eq!(post.body, "no front matter");
        assert_eq!(post.display_date(), None);
    }

    #[test]
    fn test_summary_drops_body() {
        let post = BlogPost::from_document(
            "s",
            parse_document("---\ntitle: S\ndate: 2024-05-05\n---\nbody"),
        );
        let summary = post.summary();
        assert_eq!(summary.slug, "s");
        assert_eq!(summary.title, "S");
        assert_eq!(summary.date, post.date);
        assert_eq!(summary.display_date().as_deref(), Some("May 5, 2024"));
    }
}
