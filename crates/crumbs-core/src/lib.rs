//! Breadcrumb trail rendering with pluggable builders.
//!
//! This crate turns an ordered list of [`Element`]s into breadcrumb markup
//! annotated with schema.org microdata.
//!
//! # Architecture
//!
//! - [`Element`]: one crumb. Its name and path are [`Resolvable`] values
//!   (identifier, computed or literal) resolved lazily at render time.
//! - [`RenderContext`]: the host capabilities a builder relies on (identifier
//!   lookup, URL generation, current-page detection, markup helpers).
//!   [`HtmlContext`] is a ready-made implementation for standalone use.
//! - [`Builder`]: rendering strategy. [`SimpleBuilder`] is the default;
//!   custom builders reuse [`resolve_name`] and [`resolve_path`].
//! - [`BuilderRegistry`]: selects a builder by name for a [`Trail`].
//!
//! # Example
//!
//! ```
//! use crumbs_core::{BuilderOptions, BuilderRegistry, HtmlContext, RenderOptions, Trail};
//!
//! let mut trail = Trail::new();
//! trail.add("Home", "/");
//! trail.add("Products", "/products");
//! trail.add_unlinked("Widget");
//!
//! let ctx = HtmlContext::new("/products");
//! let options = RenderOptions::new()
//!     .with_builder_options(BuilderOptions::new().with_tag("li"));
//!
//! let html = BuilderRegistry::default().render(&ctx, &trail, &options).unwrap();
//! assert_eq!(html.as_str().matches("<li ").count(), 3);
//! ```

mod builder;
mod context;
mod element;
mod error;
mod html;
mod markup;
mod options;
mod simple;
mod trail;

pub use builder::{Builder, resolve_name, resolve_path};
pub use context::RenderContext;
pub use element::{ContextFn, Element, Extensions, Resolvable};
pub use error::RenderError;
pub use html::HtmlContext;
pub use markup::{Attributes, Markup, escape_html, is_valid_tag_name};
pub use options::BuilderOptions;
pub use simple::SimpleBuilder;
pub use trail::{BuilderRegistry, RenderOptions, Trail};
