//! Loading and checking page content files.
//!
//! Content is plain JSON shaped like [`PageContent`]. Any field left out of
//! the file keeps its default value, so a file only needs the copy it changes:
//!
//! ```rust
//! use tiffany_page::types::PageContent;
//!
//! let content = PageContent::from_json_str(r#"{ "about": { "heading": "Hello" } }"#).unwrap();
//! assert_eq!(content.about.heading, "Hello");
//! assert_eq!(content.services.items.len(), 3);
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::types::PageContent;

/// Errors raised while reading a content file.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The file could not be read
    #[error("failed to read content file {path}: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid content JSON
    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The content parsed but would render a broken page
    #[error("invalid content: {0}")]
    Invalid(String),
}

impl PageContent {
    /// Parse content from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let content: PageContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a content file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = json.len(), "loaded content file");
        Self::from_json_str(&json)
    }

    /// Pretty JSON for this content, the format accepted by [`PageContent::load`].
    pub fn to_json_pretty(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Structural checks on the collections.
    ///
    /// Portfolio indices must be 1-based and unique (they name image files),
    /// service titles and testimonial quotes must be non-empty, and form field
    /// names must be non-empty and unique.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for item in &self.portfolio.items {
            if item.index == 0 {
                return Err(ContentError::Invalid(
                    "portfolio item index must start at 1".into(),
                ));
            }
            if !seen.insert(item.index) {
                return Err(ContentError::Invalid(format!(
                    "duplicate portfolio item index {}",
                    item.index
                )));
            }
        }

        if let Some(pos) = self
            .services
            .items
            .iter()
            .position(|s| s.title.trim().is_empty())
        {
            return Err(ContentError::Invalid(format!(
                "service #{} has an empty title",
                pos + 1
            )));
        }

        if let Some(pos) = self
            .testimonials
            .items
            .iter()
            .position(|t| t.quote.trim().is_empty())
        {
            return Err(ContentError::Invalid(format!(
                "testimonial #{} has an empty quote",
                pos + 1
            )));
        }

        let mut names = HashSet::new();
        for field in &self.contact.fields {
            if field.name.trim().is_empty() {
                return Err(ContentError::Invalid(format!(
                    "contact field '{}' has an empty name",
                    field.label
                )));
            }
            if !names.insert(field.name.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate contact field name '{}'",
                    field.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PortfolioItem, Service};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_content_is_valid() {
        PageContent::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let content = PageContent::from_json_str(
            r#"{ "testimonials": { "items": [ { "quote": "Magic.", "attribution": "— A. B." } ] } }"#,
        )
        .unwrap();

        assert_eq!(content.testimonials.items.len(), 1);
        assert_eq!(content.testimonials.heading, "What clients say");
        assert_eq!(content.hero, PageContent::default().hero);
    }

    #[test]
    fn json_export_loads_back_unchanged() {
        let content = PageContent::default();
        let json = content.to_json_pretty().unwrap();
        assert_eq!(PageContent::from_json_str(&json).unwrap(), content);
    }

    #[test]
    fn field_kind_uses_lowercase_names() {
        let content = PageContent::default();
        let json = content.to_json_pretty().unwrap();
        assert!(json.contains(r#""kind": "textarea""#));
        assert!(json.contains(r#""kind": "email""#));
    }

    #[test]
    fn rejects_zero_portfolio_index() {
        let mut content = PageContent::default();
        content.portfolio.items[0].index = 0;
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn rejects_duplicate_portfolio_index() {
        let mut content = PageContent::default();
        content.portfolio.items.push(PortfolioItem::placeholder(3));
        let err = content.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid content: duplicate portfolio item index 3");
    }

    #[test]
    fn rejects_blank_service_title() {
        let mut content = PageContent::default();
        content.services.items.push(Service {
            title: "  ".into(),
            description: "Nothing".into(),
        });
        let err = content.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid content: service #4 has an empty title");
    }

    #[test]
    fn rejects_duplicate_field_names() {
        let mut content = PageContent::default();
        let dup = content.contact.fields[0].clone();
        content.contact.fields.push(dup);
        assert!(content.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PageContent::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = PageContent::load(&path).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, r#"{ "cta": { "heading": "Let's talk" } }"#).unwrap();

        let content = PageContent::load(&path).unwrap();
        assert_eq!(content.cta.heading, "Let's talk");
        assert_eq!(content.cta.background, "/images/cta.jpg");
    }
}
