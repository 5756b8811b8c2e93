//! Argument checks shared by the principle crates.
//!
//! Each check takes the caller's message so the error text stays next to the
//! type that owns the rule.

use crate::error::{DomainError, DomainResult};

/// Reject blank input; return the trimmed value.
pub fn ensure_not_blank<'a>(value: &'a str, message: &str) -> DomainResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_argument(message));
    }
    Ok(trimmed)
}

/// Reject negative values and NaN.
pub fn ensure_non_negative(value: f64, message: &str) -> DomainResult<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(DomainError::invalid_argument(message));
    }
    Ok(value)
}

/// Reject `None`; the lab's stand-in for a null reference.
pub fn ensure_present<T>(value: Option<T>, message: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::invalid_argument(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_rejected() {
        for input in ["", "   ", "\t\n"] {
            let err = ensure_not_blank(input, "vacío").unwrap_err();
            assert_eq!(err, DomainError::invalid_argument("vacío"));
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(ensure_not_blank("  Cliente  ", "vacío").unwrap(), "Cliente");
    }

    #[test]
    fn negative_and_nan_are_rejected() {
        assert!(ensure_non_negative(-0.01, "negativo").is_err());
        assert!(ensure_non_negative(f64::NAN, "negativo").is_err());
        assert_eq!(ensure_non_negative(0.0, "negativo").unwrap(), 0.0);
    }

    #[test]
    fn missing_value_is_rejected() {
        let err = ensure_present::<u8>(None, "no puede ser null").unwrap_err();
        assert_eq!(err.message(), Some("no puede ser null"));
        assert_eq!(ensure_present(Some(3), "x").unwrap(), 3);
    }
}
