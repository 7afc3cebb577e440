//! Safe markup and attribute primitives.
//!
//! [`Markup`] is a string that is known to be safe to embed in an HTML page.
//! It is produced by escaping text, by composing other markup, or by an
//! explicit [`Markup::raw`]. Everything the rendering pipeline hands back to
//! a caller is `Markup`, so text can never reach the output unescaped.

use std::borrow::Cow;
use std::fmt::{self, Write};

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Whether `name` can be emitted as an element name.
///
/// Accepts an ASCII letter followed by ASCII letters, digits or `-`, which
/// covers `li`, `h2` and custom elements such as `crumb-item`.
#[must_use]
pub fn is_valid_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// A fragment of markup that is safe to embed as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Create empty markup.
    #[must_use]
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Escape plain text into markup.
    ///
    /// ```
    /// use crumbs_core::Markup;
    ///
    /// assert_eq!(Markup::text("Q&A").as_str(), "Q&amp;A");
    /// ```
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Trust `html` as markup without escaping.
    ///
    /// Only use this for strings assembled from already-escaped parts or
    /// fixed literals.
    #[must_use]
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Append another fragment.
    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    /// Join fragments with a separator placed between consecutive items.
    #[must_use]
    pub fn join<I>(parts: I, separator: &Markup) -> Self
    where
        I: IntoIterator<Item = Markup>,
    {
        let mut out = Self::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push(&part);
        }
        out
    }

    /// Borrow the markup as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::ops::Add<&Markup> for Markup {
    type Output = Markup;

    fn add(mut self, rhs: &Markup) -> Markup {
        self.push(rhs);
        self
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

/// Ordered HTML attribute list.
///
/// Attributes render in insertion order. Inserting a key that is already
/// present replaces its value in place. An empty value renders as a bare
/// attribute (`itemscope`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(Cow<'static, str>, String)>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an attribute, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Render as ` key="value"` pairs with a leading space per attribute.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            if value.is_empty() {
                let _ = write!(out, " {}", escape_html(key));
            } else {
                let _ = write!(out, r#" {}="{}""#, escape_html(key), escape_html(value));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_valid_tag_names() {
        assert!(is_valid_tag_name("li"));
        assert!(is_valid_tag_name("h2"));
        assert!(is_valid_tag_name("crumb-item"));
    }

    #[test]
    fn test_invalid_tag_names() {
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("2li"));
        assert!(!is_valid_tag_name("-li"));
        assert!(!is_valid_tag_name("li onclick=alert(1)"));
        assert!(!is_valid_tag_name("li>"));
        assert!(!is_valid_tag_name("<li"));
    }

    #[test]
    fn test_markup_text_escapes() {
        assert_eq!(Markup::text("<b>").as_str(), "&lt;b&gt;");
    }

    #[test]
    fn test_markup_raw_is_untouched() {
        assert_eq!(Markup::raw("<b>").as_str(), "<b>");
    }

    #[test]
    fn test_join_places_separator_between_items_only() {
        let parts = vec![Markup::raw("a"), Markup::raw("b"), Markup::raw("c")];
        let joined = Markup::join(parts, &Markup::raw(" / "));
        assert_eq!(joined.as_str(), "a / b / c");
    }

    #[test]
    fn test_join_empty() {
        let joined = Markup::join(Vec::new(), &Markup::raw(" / "));
        assert!(joined.is_empty());
    }

    #[test]
    fn test_add_concatenates() {
        let markup = Markup::raw("<i>") + &Markup::raw("</i>");
        assert_eq!(markup.to_string(), "<i></i>");
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let attrs = Attributes::new()
            .with("itemscope", "")
            .with("itemprop", "itemListElement")
            .with("itemtype", "http://schema.org/ListItem");
        assert_eq!(
            attrs.to_html(),
            r#" itemscope itemprop="itemListElement" itemtype="http://schema.org/ListItem""#
        );
    }

    #[test]
    fn test_attributes_insert_replaces_in_place() {
        let mut attrs = Attributes::new().with("href", "/a").with("class", "x");
        attrs.insert("href", "/b");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("href"), Some("/b"));
        assert_eq!(attrs.to_html(), r#" href="/b" class="x""#);
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let attrs = Attributes::new().with("title", r#"say "hi""#);
        assert_eq!(attrs.to_html(), r#" title="say &quot;hi&quot;""#);
    }
}
