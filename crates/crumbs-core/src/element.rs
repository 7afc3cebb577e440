//! Breadcrumb elements.
//!
//! An [`Element`] is one crumb: a display name, an optional link target and an
//! open map of extension options. Names and paths are [`Resolvable`] values
//! that are only turned into strings when a builder renders the trail, so
//! expensive or context-dependent lookups are deferred until render time.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::context::RenderContext;
use crate::error::RenderError;

/// Extension options attached to an element or to builder options.
///
/// Opaque to the core; custom builders interpret whatever keys they need.
pub type Extensions = BTreeMap<String, Value>;

/// Callable that computes a name or path from the rendering context.
pub type ContextFn = Arc<dyn Fn(&dyn RenderContext) -> Result<String, RenderError> + Send + Sync>;

/// A name or path value in one of three shapes.
#[derive(Clone)]
pub enum Resolvable {
    /// Symbolic reference looked up on the context with
    /// [`RenderContext::call`].
    Identifier(String),
    /// Computed from the context at render time.
    Computed(ContextFn),
    /// Literal display string or literal location.
    Literal(String),
}

impl Resolvable {
    /// Reference a value the context resolves by name.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Compute the value from the context when rendering.
    ///
    /// ```
    /// use crumbs_core::{RenderContext, Resolvable};
    ///
    /// let name = Resolvable::computed(|ctx: &dyn RenderContext| ctx.call("product_name"));
    /// assert!(matches!(name, Resolvable::Computed(_)));
    /// ```
    #[must_use]
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&dyn RenderContext) -> Result<String, RenderError> + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }
}

impl fmt::Debug for Resolvable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => f.debug_tuple("Identifier").field(name).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
        }
    }
}

impl From<&str> for Resolvable {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

impl From<String> for Resolvable {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

/// One entry in a breadcrumb trail.
///
/// Construction is builder-style; once built an element only exposes
/// accessors, and builders receive elements by shared reference.
///
/// # Example
///
/// ```
/// use crumbs_core::{Element, Resolvable};
///
/// let home = Element::new("Home").with_path("/");
/// let product = Element::new(Resolvable::identifier("product_name"));
///
/// assert!(home.path().is_some());
/// assert!(product.path().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Element {
    name: Resolvable,
    path: Option<Resolvable>,
    options: Extensions,
}

impl Element {
    /// Create an unlinked element.
    #[must_use]
    pub fn new(name: impl Into<Resolvable>) -> Self {
        Self {
            name: name.into(),
            path: None,
            options: Extensions::new(),
        }
    }

    /// Link the element to `path`.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<Resolvable>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach a single extension option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Replace the extension options.
    #[must_use]
    pub fn with_options(mut self, options: Extensions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn name(&self) -> &Resolvable {
        &self.name
    }

    /// Link target, `None` when the crumb is not a link.
    #[must_use]
    pub fn path(&self) -> Option<&Resolvable> {
        self.path.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> &Extensions {
        &self.options
    }

    /// Look up a single extension option.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_has_no_path_and_no_options() {
        let element = Element::new("Widget");

        assert!(matches!(element.name(), Resolvable::Literal(name) if name == "Widget"));
        assert!(element.path().is_none());
        assert!(element.options().is_empty());
    }

    #[test]
    fn test_with_path_literal() {
        let element = Element::new("Home").with_path("/");

        assert!(matches!(element.path(), Some(Resolvable::Literal(path)) if path == "/"));
    }

    #[test]
    fn test_with_path_identifier() {
        let element = Element::new("Products").with_path(Resolvable::identifier("products_path"));

        assert!(
            matches!(element.path(), Some(Resolvable::Identifier(id)) if id == "products_path")
        );
    }

    #[test]
    fn test_options_pass_through() {
        let element = Element::new("Home")
            .with_option("class", "home")
            .with_option("weight", 3);

        assert_eq!(element.option("class"), Some(&json!("home")));
        assert_eq!(element.option("weight"), Some(&json!(3)));
        assert_eq!(element.option("missing"), None);
    }

    #[test]
    fn test_with_options_replaces_map() {
        let mut options = Extensions::new();
        options.insert("rel".to_owned(), json!("up"));

        let element = Element::new("Home")
            .with_option("class", "home")
            .with_options(options);

        assert_eq!(element.options().len(), 1);
        assert_eq!(element.option("rel"), Some(&json!("up")));
    }

    #[test]
    fn test_debug_hides_callable() {
        let name = Resolvable::computed(|_ctx: &dyn RenderContext| Ok("Dynamic".to_owned()));
        assert_eq!(format!("{name:?}"), "Computed(..)");
    }

    #[test]
    fn test_clone_shares_callable() {
        let element = Element::new(Resolvable::computed(|_ctx: &dyn RenderContext| {
            Ok("Dynamic".to_owned())
        }));
        let copy = element.clone();

        match (element.name(), copy.name()) {
            (Resolvable::Computed(a), Resolvable::Computed(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected computed names"),
        }
    }
}
