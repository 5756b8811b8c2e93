//! Value object trait: equality by value, not identity.
//!
//! Everything the lab constructs is a value object: an invoice is its customer
//! and amount, nothing more. Objects are built, used once and dropped.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Invoice {
///     customer: String,
///     amount: Amount,
/// }
///
/// impl ValueObject for Invoice {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
