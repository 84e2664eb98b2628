use thiserror::Error;

/// Failures a page component can run into.
///
/// None of them are fatal to the page: callers log the error and skip the
/// component or the single operation that produced it.
#[derive(Debug, Error)]
pub enum PageError {
    /// A DOM node the component cannot work without is absent.
    #[error("required element `{0}` not found")]
    MissingElement(&'static str),

    /// A browser API rejected the call.
    #[error("{action} failed: {message}")]
    Platform {
        action: &'static str,
        message: String,
    },

    /// The inline page config could not be parsed.
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PageError {
    pub fn platform(action: &'static str, message: impl Into<String>) -> Self {
        PageError::Platform {
            action,
            message: message.into(),
        }
    }
}
