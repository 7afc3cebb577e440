//! Rendering context capability interface.
//!
//! Builders never talk to the host environment directly. Everything they need
//! (identifier lookup, URL generation, current-page detection and markup
//! helpers) goes through a [`RenderContext`]. Hosts implement it once per
//! integration; the markup helpers have HTML defaults so most hosts only
//! provide [`call`](RenderContext::call), [`url_for`](RenderContext::url_for)
//! and [`is_current`](RenderContext::is_current).

use crate::error::RenderError;
use crate::markup::{Attributes, Markup, escape_html};

/// Host capabilities consumed while rendering a trail.
pub trait RenderContext {
    /// Resolve a zero-argument identifier to a string or location.
    ///
    /// Unknown identifiers should fail with
    /// [`RenderError::UnknownIdentifier`].
    fn call(&self, identifier: &str) -> Result<String, RenderError>;

    /// Resolve a literal path into a fully formed location.
    fn url_for(&self, location: &str) -> Result<String, RenderError>;

    /// Whether `location` is the page currently being rendered.
    ///
    /// The normalization rules (trailing slashes, query strings) are the
    /// host's decision.
    fn is_current(&self, location: &str) -> bool;

    /// Escape plain text for embedding in markup.
    fn escape(&self, text: &str) -> Markup {
        Markup::text(text)
    }

    /// Escape an assembled fragment.
    ///
    /// Markup is already safe, so the default returns it unchanged.
    fn escape_markup(&self, markup: Markup) -> Markup {
        markup
    }

    /// Trust a literal string as markup.
    fn raw(&self, html: &str) -> Markup {
        Markup::raw(html)
    }

    /// Wrap `content` in a `tag` element carrying `attrs`.
    fn content_tag(&self, tag: &str, content: &Markup, attrs: &Attributes) -> Markup {
        let tag = escape_html(tag);
        Markup::raw(format!("<{tag}{}>{content}</{tag}>", attrs.to_html()))
    }

    /// Render a link to `location` labeled `name`, or just the label when
    /// `location` is the current page. Both forms carry `attrs`.
    fn link_to_unless_current(&self, name: &Markup, location: &str, attrs: &Attributes) -> Markup {
        if self.is_current(location) {
            self.content_tag("span", name, attrs)
        } else {
            let mut link_attrs = Attributes::new().with("href", location);
            for (key, value) in attrs.iter() {
                link_attrs.insert(key.to_owned(), value);
            }
            self.content_tag("a", name, &link_attrs)
        }
    }
}
