use thiserror::Error;

/// Canonical result for every lazyq crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed call arguments, raised while the chain is being built.
    #[error("{0}")]
    Validation(String),

    #[error("Sequence contains no matching element.")]
    EmptySequence,

    /// Non-finite/non-numeric aggregate input, or a JSON value of the wrong shape.
    #[error("{0}")]
    TypeConversion(String),

    // Parse failures pass through untouched.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn type_conversion(msg: impl Into<String>) -> Self {
        Error::TypeConversion(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_message() {
        assert_eq!(
            Error::EmptySequence.to_string(),
            "Sequence contains no matching element."
        );
    }

    #[test]
    fn test_json_error_is_transparent() {
        let parse_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let expected = parse_err.to_string();
        let err: Error = parse_err.into();
        assert_eq!(err.to_string(), expected);
        assert!(matches!(err, Error::Json(_)));
    }
}
