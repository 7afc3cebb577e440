//! Rendering error type.

/// Error raised while rendering a breadcrumb trail.
///
/// The core never recovers from these: whatever the context or a computed
/// value reports is handed back from `render` unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The context does not know a resolver identifier.
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),

    /// The context could not turn a literal path into a location.
    #[error("Cannot resolve location {location:?}: {message}")]
    Location {
        /// Literal path that failed to resolve.
        location: String,
        /// Reason reported by the context.
        message: String,
    },

    /// A computed name or path failed.
    #[error("Computed value failed: {0}")]
    Callable(String),

    /// The configured wrapper tag is not a plain element name.
    #[error("Invalid wrapper tag: {0:?}")]
    InvalidTag(String),

    /// No builder is registered under the requested name.
    #[error("Unknown breadcrumb builder: {0}")]
    UnknownBuilder(String),

    /// Any other error raised by the host environment.
    #[error(transparent)]
    Host(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl RenderError {
    /// Create a [`RenderError::Location`].
    #[must_use]
    pub fn location(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Location {
            location: location.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_identifier_message() {
        let err = RenderError::UnknownIdentifier("site_name".to_owned());
        assert_eq!(err.to_string(), "Unknown identifier: site_name");
    }

    #[test]
    fn test_location_message() {
        let err = RenderError::location("::bad", "invalid scheme");
        assert_eq!(
            err.to_string(),
            r#"Cannot resolve location "::bad": invalid scheme"#
        );
    }

    #[test]
    fn test_invalid_tag_message() {
        let err = RenderError::InvalidTag("li class=x".to_owned());
        assert_eq!(err.to_string(), r#"Invalid wrapper tag: "li class=x""#);
    }

    #[test]
    fn test_host_error_is_transparent() {
        let io = std::io::Error::other("lookup table offline");
        let err = RenderError::from(Box::new(io) as Box<dyn std::error::Error + Send + Sync>);
        assert_eq!(err.to_string(), "lookup table offline");
    }
}
