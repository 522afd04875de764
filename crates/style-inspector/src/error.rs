//! Error types for cascade inspection.

/// Result type alias for inspector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building rule views or sessions.
///
/// These are contract violations by the data provider or the embedder.
/// Missing optional data (no stylesheet, no source map, no ancestor id) is
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A rule snapshot does not describe a usable rule.
    #[error("Invalid rule: {message}")]
    InvalidRule { message: String },

    /// Selector text that produces no selectors.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// Inspector configuration rejected by validation.
    #[error("Invalid inspector configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    /// Create a rule error.
    pub fn invalid_rule(message: impl Into<String>) -> Self {
        Self::InvalidRule {
            message: message.into(),
        }
    }

    /// Create a selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
