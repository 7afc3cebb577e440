//! Trail collection and builder selection.
//!
//! [`Trail`] collects the elements for one page view. [`BuilderRegistry`]
//! holds the available builders and picks one per render call from
//! [`RenderOptions::builder`], so builder selection stays outside the builders
//! themselves.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::builder::Builder;
use crate::context::RenderContext;
use crate::element::{Element, Resolvable};
use crate::error::RenderError;
use crate::markup::Markup;
use crate::options::BuilderOptions;
use crate::simple::SimpleBuilder;

/// Ordered breadcrumb elements for one page.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    elements: Vec<Element>,
}

impl Trail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Append a linked element.
    pub fn add(&mut self, name: impl Into<Resolvable>, path: impl Into<Resolvable>) {
        self.push(Element::new(name).with_path(path));
    }

    /// Append an element that is never rendered as a link.
    pub fn add_unlinked(&mut self, name: impl Into<Resolvable>) {
        self.push(Element::new(name));
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl FromIterator<Element> for Trail {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Element> for Trail {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Per-call render configuration: builder selection plus builder options.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Registered builder name, [`SimpleBuilder`] when unset.
    pub builder: Option<String>,
    /// Options handed to the selected builder.
    #[serde(flatten)]
    pub builder_options: BuilderOptions,
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_builder(mut self, builder: impl Into<String>) -> Self {
        self.builder = Some(builder.into());
        self
    }

    #[must_use]
    pub fn with_builder_options(mut self, options: BuilderOptions) -> Self {
        self.builder_options = options;
        self
    }

    /// Name of the builder to use.
    #[must_use]
    pub fn builder_name(&self) -> &str {
        self.builder.as_deref().unwrap_or(SimpleBuilder::NAME)
    }
}

/// Builders available to the rendering layer, keyed by name.
///
/// The default registry contains [`SimpleBuilder`] under `"simple"`.
///
/// # Example
///
/// ```
/// use crumbs_core::{BuilderRegistry, HtmlContext, RenderOptions, Trail};
///
/// let mut trail = Trail::new();
/// trail.add("Home", "/");
/// trail.add_unlinked("Widget");
///
/// let registry = BuilderRegistry::default();
/// let html = registry
///     .render(&HtmlContext::new("/widget"), &trail, &RenderOptions::default())
///     .unwrap();
/// assert!(html.as_str().contains(r#"<a href="/""#));
/// ```
#[derive(Clone)]
pub struct BuilderRegistry {
    builders: BTreeMap<String, Arc<dyn Builder>>,
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(SimpleBuilder);
        registry
    }
}

impl std::fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("builders", &self.builders.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl BuilderRegistry {
    /// Create a registry without any builders.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    /// Register `builder` under its [`Builder::name`], replacing any builder
    /// previously registered under that name.
    pub fn register(&mut self, builder: impl Builder + 'static) {
        self.register_arc(Arc::new(builder));
    }

    /// Register a shared builder.
    pub fn register_arc(&mut self, builder: Arc<dyn Builder>) {
        self.builders.insert(builder.name().to_owned(), builder);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Builder>> {
        self.builders.get(name)
    }

    /// Registered builder names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }

    /// Render `trail` with the builder selected by `options`.
    pub fn render(
        &self,
        ctx: &dyn RenderContext,
        trail: &Trail,
        options: &RenderOptions,
    ) -> Result<Markup, RenderError> {
        let name = options.builder_name();
        let builder = self
            .get(name)
            .ok_or_else(|| RenderError::UnknownBuilder(name.to_owned()))?;

        tracing::debug!(builder = name, elements = trail.len(), "Rendering breadcrumbs");

        builder.render(ctx, trail.elements(), &options.builder_options)
    }
}
