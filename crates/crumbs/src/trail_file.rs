//! Trail file parsing.
//!
//! A trail file lists crumbs in order. Names and paths are either plain
//! strings (literals) or `{ helper = "name" }` tables resolved through the
//! configured helpers:
//!
//! ```toml
//! [[crumb]]
//! name = "Home"
//! path = "/"
//!
//! [[crumb]]
//! name = { helper = "product_name" }
//! options = { rel = "up" }
//! ```
//!
//! JSON files use the same shape: `{ "crumb": [ { "name": "Home", "path": "/" } ] }`.

use std::path::Path;

use crumbs_core::{Element, Extensions, Resolvable, Trail};
use serde::Deserialize;

use crate::error::CliError;

/// Serialization format of a trail file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TrailFormat {
    Toml,
    Json,
}

impl TrailFormat {
    /// Pick the format from the file extension, TOML unless it is `.json`.
    pub(crate) fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TrailFile {
    #[serde(default, rename = "crumb")]
    crumbs: Vec<CrumbEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CrumbEntry {
    name: ValueEntry,
    path: Option<ValueEntry>,
    #[serde(default)]
    options: Extensions,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ValueEntry {
    Literal(String),
    Helper(HelperRef),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HelperRef {
    helper: String,
}

impl From<ValueEntry> for Resolvable {
    fn from(entry: ValueEntry) -> Self {
        match entry {
            ValueEntry::Literal(value) => Resolvable::Literal(value),
            ValueEntry::Helper(HelperRef { helper }) => Resolvable::Identifier(helper),
        }
    }
}

impl From<CrumbEntry> for Element {
    fn from(entry: CrumbEntry) -> Self {
        let element = Element::new(entry.name).with_options(entry.options);
        match entry.path {
            Some(path) => element.with_path(path),
            None => element,
        }
    }
}

/// Parse trail file contents.
pub(crate) fn parse_trail(content: &str, format: TrailFormat) -> Result<Trail, CliError> {
    let file: TrailFile = match format {
        TrailFormat::Toml => toml::from_str(content)?,
        TrailFormat::Json => serde_json::from_str(content)?,
    };
    Ok(file.crumbs.into_iter().map(Element::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn literal(resolvable: &Resolvable) -> Option<&str> {
        match resolvable {
            Resolvable::Literal(value) => Some(value),
            _ => None,
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(TrailFormat::from_path(Path::new("t.json")), TrailFormat::Json);
        assert_eq!(TrailFormat::from_path(Path::new("t.JSON")), TrailFormat::Json);
        assert_eq!(TrailFormat::from_path(Path::new("t.toml")), TrailFormat::Toml);
        assert_eq!(TrailFormat::from_path(Path::new("trail")), TrailFormat::Toml);
    }

    #[test]
    fn test_parse_toml_trail() {
        let toml = r#"
[[crumb]]
name = "Home"
path = "/"

[[crumb]]
name = "Products"
path = { helper = "products_path" }

[[crumb]]
name = { helper = "product_name" }
options = { rel = "up" }
"#;
        let trail = parse_trail(toml, TrailFormat::Toml).unwrap();
        let elements = trail.elements();

        assert_eq!(elements.len(), 3);
        assert_eq!(literal(elements[0].name()), Some("Home"));
        assert_eq!(elements[0].path().and_then(literal), Some("/"));
        assert!(matches!(
            elements[1].path(),
            Some(Resolvable::Identifier(id)) if id == "products_path"
        ));
        assert!(matches!(
            elements[2].name(),
            Resolvable::Identifier(id) if id == "product_name"
        ));
        assert!(elements[2].path().is_none());
        assert_eq!(elements[2].option("rel"), Some(&json!("up")));
    }

    #[test]
    fn test_parse_json_trail() {
        let json = r#"{"crumb": [{"name": "Home", "path": "/"}, {"name": "Widget"}]}"#;
        let trail = parse_trail(json, TrailFormat::Json).unwrap();

        assert_eq!(trail.len(), 2);
        assert!(trail.elements()[1].path().is_none());
    }

    #[test]
    fn test_parse_empty_trail() {
        let trail = parse_trail("", TrailFormat::Toml).unwrap();
        assert!(trail.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_crumb_keys() {
        let toml = r#"
[[crumb]]
name = "Home"
href = "/"
"#;
        let err = parse_trail(toml, TrailFormat::Toml).unwrap_err();
        assert!(matches!(err, CliError::TrailToml(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_helper_keys() {
        let toml = r#"
[[crumb]]
name = { helper = "product_name", hepler = "product_title" }
"#;
        let err = parse_trail(toml, TrailFormat::Toml).unwrap_err();
        assert!(matches!(err, CliError::TrailToml(_)));

        let json = r#"{"crumb": [{"name": "Widget", "path": {"helper": "p", "base": "/"}}]}"#;
        let err = parse_trail(json, TrailFormat::Json).unwrap_err();
        assert!(matches!(err, CliError::TrailJson(_)));
    }

    #[test]
    fn test_parse_requires_name() {
        let err = parse_trail(r#"{"crumb": [{"path": "/"}]}"#, TrailFormat::Json).unwrap_err();
        assert!(matches!(err, CliError::TrailJson(_)));
    }
}
