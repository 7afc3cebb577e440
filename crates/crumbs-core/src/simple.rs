//! Default breadcrumb builder.

use crate::builder::{Builder, resolve_name, resolve_path};
use crate::context::RenderContext;
use crate::element::Element;
use crate::error::RenderError;
use crate::markup::{Attributes, Markup};
use crate::options::BuilderOptions;

/// schema.org type of every wrapped list item.
const LIST_ITEM_TYPE: &str = "http://schema.org/ListItem";

/// No-frills builder producing microdata-annotated crumbs.
///
/// Each element renders as its name (or a link to its path, unless the path is
/// the current page) followed by a `position` meta tag. With a `tag` option
/// every fragment is wrapped in a list-item container, otherwise fragments are
/// escaped and emitted bare. Fragments are joined with the `separator` option.
///
/// # Example
///
/// ```
/// use crumbs_core::{Builder, BuilderOptions, Element, HtmlContext, SimpleBuilder};
///
/// let ctx = HtmlContext::new("/products");
/// let elements = [
///     Element::new("Home").with_path("/"),
///     Element::new("Products").with_path("/products"),
/// ];
///
/// let html = SimpleBuilder
///     .render(&ctx, &elements, &BuilderOptions::new().with_tag("li"))
///     .unwrap();
/// assert!(html.as_str().starts_with(r#"<li itemscope itemprop="itemListElement""#));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleBuilder;

impl SimpleBuilder {
    /// Registry name of this builder.
    pub const NAME: &'static str = "simple";

    fn render_element(
        ctx: &dyn RenderContext,
        element: &Element,
        position: usize,
        tag: Option<&str>,
    ) -> Result<Markup, RenderError> {
        let position_marker = ctx.raw(&format!(
            r#"<meta itemprop="position" content="{position}" />"#
        ));
        let name = resolve_name(ctx, element)?;

        let content = match resolve_path(ctx, element)? {
            None => name,
            Some(location) => {
                let attrs = Attributes::new().with("itemprop", "item");
                ctx.link_to_unless_current(&name, &location, &attrs)
            }
        } + &position_marker;

        Ok(match tag {
            Some(tag) => {
                let attrs = Attributes::new()
                    .with("itemscope", "")
                    .with("itemprop", "itemListElement")
                    .with("itemtype", LIST_ITEM_TYPE);
                ctx.content_tag(tag, &content, &attrs)
            }
            None => ctx.escape_markup(content),
        })
    }
}

impl Builder for SimpleBuilder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(
        &self,
        ctx: &dyn RenderContext,
        elements: &[Element],
        options: &BuilderOptions,
    ) -> Result<Markup, RenderError> {
        options.validate()?;
        let tag = options.tag();
        let fragments = elements
            .iter()
            .enumerate()
            .map(|(i, element)| Self::render_element(ctx, element, i + 1, tag))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Markup::join(fragments, &ctx.raw(options.separator())))
    }
}
