//! Builder contract and shared resolution helpers.
//!
//! A [`Builder`] turns an ordered slice of [`Element`]s into markup. The
//! default strategy is [`SimpleBuilder`](crate::SimpleBuilder); hosts plug in
//! their own by implementing the trait and registering it in a
//! [`BuilderRegistry`](crate::BuilderRegistry).
//!
//! Implementations resolve element names and paths with [`resolve_name`] and
//! [`resolve_path`], which dispatch on the [`Resolvable`] shape:
//!
//! | shape | name | path |
//! |---|---|---|
//! | `Identifier` | `ctx.call(id)`, escaped | `ctx.call(id)` |
//! | `Computed` | `f(ctx)`, escaped | `f(ctx)` |
//! | `Literal` | escaped and wrapped in `<span itemprop="name">` | `ctx.url_for(value)` |

use crate::context::RenderContext;
use crate::element::{Element, Resolvable};
use crate::error::RenderError;
use crate::markup::{Attributes, Markup};
use crate::options::BuilderOptions;

/// Strategy that renders a breadcrumb trail.
///
/// # Example
///
/// ```
/// use crumbs_core::{
///     Builder, BuilderOptions, Element, HtmlContext, Markup, RenderContext, RenderError,
///     resolve_name,
/// };
///
/// /// Renders names only, separated by " > ".
/// struct PlainBuilder;
///
/// impl Builder for PlainBuilder {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn render(
///         &self,
///         ctx: &dyn RenderContext,
///         elements: &[Element],
///         _options: &BuilderOptions,
///     ) -> Result<Markup, RenderError> {
///         let names = elements
///             .iter()
///             .map(|element| resolve_name(ctx, element))
///             .collect::<Result<Vec<_>, _>>()?;
///         Ok(Markup::join(names, &Markup::raw(" &gt; ")))
///     }
/// }
///
/// let ctx = HtmlContext::new("/");
/// let out = PlainBuilder
///     .render(&ctx, &[Element::new("Home")], &BuilderOptions::default())
///     .unwrap();
/// assert_eq!(out.as_str(), r#"<span itemprop="name">Home</span>"#);
/// ```
pub trait Builder: Send + Sync {
    /// Name used to select this builder in a registry.
    fn name(&self) -> &str;

    /// Render `elements` in order.
    ///
    /// Must not mutate anything reachable from its inputs. Errors raised by
    /// the context propagate unchanged.
    fn render(
        &self,
        ctx: &dyn RenderContext,
        elements: &[Element],
        options: &BuilderOptions,
    ) -> Result<Markup, RenderError>;
}

/// Resolve an element's display name into markup.
pub fn resolve_name(ctx: &dyn RenderContext, element: &Element) -> Result<Markup, RenderError> {
    match element.name() {
        Resolvable::Identifier(identifier) => Ok(ctx.escape(&ctx.call(identifier)?)),
        Resolvable::Computed(f) => Ok(ctx.escape(&f(ctx)?)),
        Resolvable::Literal(value) => {
            let attrs = Attributes::new().with("itemprop", "name");
            Ok(ctx.content_tag("span", &ctx.escape(value), &attrs))
        }
    }
}

/// Resolve an element's link target, `None` when the element is not a link.
pub fn resolve_path(
    ctx: &dyn RenderContext,
    element: &Element,
) -> Result<Option<String>, RenderError> {
    let Some(path) = element.path() else {
        return Ok(None);
    };

    let location = match path {
        Resolvable::Identifier(identifier) => ctx.call(identifier)?,
        Resolvable::Computed(f) => f(ctx)?,
        Resolvable::Literal(value) => ctx.url_for(value)?,
    };
    Ok(Some(location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlContext;
    use pretty_assertions::assert_eq;

    fn ctx() -> HtmlContext {
        HtmlContext::new("/products")
            .with_base_url("/shop")
            .with_helper("site_name", "Acme & Co")
            .with_helper("products_path", "/shop/products")
    }

    #[test]
    fn test_resolve_name_literal_wraps_in_name_span() {
        let name = resolve_name(&ctx(), &Element::new("Home")).unwrap();
        assert_eq!(name.as_str(), r#"<span itemprop="name">Home</span>"#);
    }

    #[test]
    fn test_resolve_name_literal_is_escaped() {
        let name = resolve_name(&ctx(), &Element::new("<Home>")).unwrap();
        assert_eq!(name.as_str(), r#"<span itemprop="name">&lt;Home&gt;</span>"#);
    }

    #[test]
    fn test_resolve_name_identifier_uses_context() {
        let element = Element::new(Resolvable::identifier("site_name"));
        let name = resolve_name(&ctx(), &element).unwrap();
        assert_eq!(name.as_str(), "Acme &amp; Co");
    }

    #[test]
    fn test_resolve_name_computed_receives_context() {
        let element = Element::new(Resolvable::computed(|ctx: &dyn RenderContext| {
            Ok(format!("{}!", ctx.call("site_name")?))
        }));
        let name = resolve_name(&ctx(), &element).unwrap();
        assert_eq!(name.as_str(), "Acme &amp; Co!");
    }

    #[test]
    fn test_resolve_name_unknown_identifier_propagates() {
        let element = Element::new(Resolvable::identifier("missing"));
        let err = resolve_name(&ctx(), &element).unwrap_err();
        assert!(matches!(err, RenderError::UnknownIdentifier(id) if id == "missing"));
    }

    #[test]
    fn test_resolve_name_computed_error_propagates() {
        let element = Element::new(Resolvable::computed(|_ctx: &dyn RenderContext| {
            Err(RenderError::Callable("locale missing".to_owned()))
        }));
        let err = resolve_name(&ctx(), &element).unwrap_err();
        assert!(matches!(err, RenderError::Callable(msg) if msg == "locale missing"));
    }

    #[test]
    fn test_resolve_path_none() {
        assert_eq!(resolve_path(&ctx(), &Element::new("Widget")).unwrap(), None);
    }

    #[test]
    fn test_resolve_path_literal_goes_through_url_for() {
        let element = Element::new("Cart").with_path("cart");
        assert_eq!(
            resolve_path(&ctx(), &element).unwrap(),
            Some("/shop/cart".to_owned())
        );
    }

    #[test]
    fn test_resolve_path_identifier_skips_url_for() {
        let element = Element::new("Products").with_path(Resolvable::identifier("products_path"));
        assert_eq!(
            resolve_path(&ctx(), &element).unwrap(),
            Some("/shop/products".to_owned())
        );
    }

    #[test]
    fn test_resolve_path_computed() {
        let element = Element::new("Item").with_path(Resolvable::computed(
            |_ctx: &dyn RenderContext| Ok("/items/42".to_owned()),
        ));
        assert_eq!(
            resolve_path(&ctx(), &element).unwrap(),
            Some("/items/42".to_owned())
        );
    }
}
