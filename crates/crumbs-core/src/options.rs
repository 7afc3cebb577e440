//! Builder configuration.

use serde::Deserialize;

use crate::element::Extensions;
use crate::error::RenderError;
use crate::markup::is_valid_tag_name;

/// Options recognized by builders.
///
/// Only `separator` and `tag` have a defined effect on [`SimpleBuilder`];
/// every other key is collected into [`extensions`](Self::extensions) and is
/// available to custom builders. Unknown keys are never an error.
///
/// [`SimpleBuilder`]: crate::SimpleBuilder
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// Raw markup inserted between rendered elements.
    pub separator: Option<String>,
    /// Container tag wrapped around each element, e.g. `li`.
    pub tag: Option<String>,
    /// Pass-through options for custom builders.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl BuilderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Separator to place between elements, empty when unset.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or_default()
    }

    /// Configured wrapper tag, treating an empty string as unset.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.is_empty())
    }

    /// Check that the wrapper tag, if set, is a plain element name.
    ///
    /// Builders call this before emitting anything, since the tag name is
    /// written into the markup unescaped.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidTag`] for anything other than an ASCII
    /// letter followed by ASCII letters, digits or `-`.
    pub fn validate(&self) -> Result<(), RenderError> {
        match self.tag() {
            Some(tag) if !is_valid_tag_name(tag) => Err(RenderError::InvalidTag(tag.to_owned())),
            _ => Ok(()),
        }
    }
}
