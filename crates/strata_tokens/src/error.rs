use thiserror::Error;

/// Errors raised while generating or exporting design tokens.
///
/// Parameter and format errors are detected before any computation starts.
/// Nothing here is retryable.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A numeric parameter was out of range or a color string was malformed.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The export format tag is not one of `css`, `scss`, `tailwind`, `json`.
    #[error("unsupported export format `{0}` (expected css, scss, tailwind or json)")]
    UnsupportedFormat(String),

    /// JSON serialization failed while exporting.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TokenError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
