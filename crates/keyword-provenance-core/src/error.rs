//! Error taxonomy for keyword extraction.
//!
//! An empty corpus is deliberately absent: it yields an empty
//! [`KeywordResult`](crate::models::KeywordResult) rather than an error.

/// Errors raised by the extraction pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// A caller-supplied argument is out of range (e.g. a keyword count of 0).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A document could not be read, or it holds no text.
    #[error("cannot use document '{path}': {reason}")]
    Input { path: String, reason: String },

    /// The text normalizer or term weighting engine failed. Passed through
    /// unchanged.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl ExtractError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn input(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_error_is_transparent() {
        let err: ExtractError = anyhow::anyhow!("malformed encoding").into();
        assert_eq!(err.to_string(), "malformed encoding");
    }

    #[test]
    fn test_input_error_names_path() {
        let err = ExtractError::input("notes/a.txt", "document is empty");
        assert_eq!(
            err.to_string(),
            "cannot use document 'notes/a.txt': document is empty"
        );
    }
}
