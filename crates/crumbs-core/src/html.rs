//! Standalone HTML rendering context.
//!
//! Hosts that have no view layer of their own (static site generators, the
//! `crumbs` CLI, tests) can render trails against [`HtmlContext`]: a fixed
//! current location, an optional base URL and a table of named helpers.

use std::collections::BTreeMap;

use crate::context::RenderContext;
use crate::error::RenderError;

/// [`RenderContext`] backed by plain configuration values.
///
/// - [`call`](RenderContext::call) looks identifiers up in the helper table.
/// - [`url_for`](RenderContext::url_for) prefixes relative literals with the
///   base URL. Absolute paths, URLs with a scheme, protocol-relative URLs and
///   fragment-only links pass through unchanged.
/// - [`is_current`](RenderContext::is_current) compares locations ignoring a
///   trailing slash and any query string or fragment.
#[derive(Clone, Debug, Default)]
pub struct HtmlContext {
    current: String,
    base_url: Option<String>,
    helpers: BTreeMap<String, String>,
}

impl HtmlContext {
    /// Create a context for the page at `current`.
    #[must_use]
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            base_url: None,
            helpers: BTreeMap::new(),
        }
    }

    /// Prefix for relative literal paths.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Register a named helper resolved by identifier.
    #[must_use]
    pub fn with_helper(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.helpers.insert(name.into(), value.into());
        self
    }

    /// Register several helpers at once.
    #[must_use]
    pub fn with_helpers<I, K, V>(mut self, helpers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.helpers
            .extend(helpers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

impl RenderContext for HtmlContext {
    fn call(&self, identifier: &str) -> Result<String, RenderError> {
        self.helpers
            .get(identifier)
            .cloned()
            .ok_or_else(|| RenderError::UnknownIdentifier(identifier.to_owned()))
    }

    fn url_for(&self, location: &str) -> Result<String, RenderError> {
        if location.chars().any(char::is_control) {
            return Err(RenderError::location(
                location,
                "contains control characters",
            ));
        }
        if is_passthrough(location) {
            return Ok(location.to_owned());
        }
        Ok(match &self.base_url {
            Some(base) => join_url(base, location),
            None => location.to_owned(),
        })
    }

    fn is_current(&self, location: &str) -> bool {
        normalize(location) == normalize(&self.current)
    }
}

/// Locations `url_for` leaves untouched.
fn is_passthrough(location: &str) -> bool {
    location.is_empty()
        || location.starts_with('/')
        || location.starts_with('#')
        || location.starts_with("http://")
        || location.starts_with("https://")
        || location.starts_with("mailto:")
        || location.starts_with("tel:")
}

fn join_url(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let relative = relative.trim_start_matches("./");
    format!("{base}/{relative}")
}

/// Strip query, fragment and a trailing slash (except for the root).
fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
