//! Domain error model.

use thiserror::Error;

/// Result type used across the principle crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure in the lab is an argument that should never have been passed
/// (null, blank, negative). Output failures are plain `std::io::Error` and stay
/// out of this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A constructor or operation received an argument it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A named implementation (tier, database backend, ...) does not exist.
    #[error("unknown {kind}: {name}")]
    Unknown { kind: &'static str, name: String },
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        Self::Unknown {
            kind,
            name: name.into(),
        }
    }

    /// Returns the message for `InvalidArgument`, `None` otherwise.
    pub fn message(&self) -> Option<&str> {
        match self {
            DomainError::InvalidArgument(msg) => Some(msg),
            DomainError::Unknown { .. } => None,
        }
    }
}

/// Failure of an operation that validates its input and then writes to a sink.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input was rejected; nothing was written.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Writing to the output sink failed.
    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

impl ConsoleError {
    /// The domain error, if that is what this is.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            ConsoleError::Domain(err) => Some(err),
            ConsoleError::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display_includes_message() {
        let err = DomainError::invalid_argument("El monto no puede ser negativo");
        assert_eq!(
            err.to_string(),
            "invalid argument: El monto no puede ser negativo"
        );
        assert_eq!(err.message(), Some("El monto no puede ser negativo"));
    }

    #[test]
    fn unknown_display_names_kind_and_value() {
        let err = DomainError::unknown("customer tier", "gold");
        assert_eq!(err.to_string(), "unknown customer tier: gold");
        assert_eq!(err.message(), None);
    }

    #[test]
    fn console_error_wraps_both_sources() {
        let domain: ConsoleError = DomainError::invalid_argument("x").into();
        assert_eq!(
            domain.as_domain(),
            Some(&DomainError::invalid_argument("x"))
        );

        let io: ConsoleError = std::io::Error::other("closed").into();
        assert!(io.as_domain().is_none());
        assert_eq!(io.to_string(), "console write failed: closed");
    }
}
