//! `solid-lab-core` — building blocks shared by the principle crates.
//!
//! This crate contains **pure domain** primitives: the error model, value
//! objects and argument checks. No console output happens here.

pub mod amount;
pub mod error;
pub mod validate;
pub mod value_object;

pub use amount::{Amount, format_decimal};
pub use error::{ConsoleError, ConsoleResult, DomainError, DomainResult};
pub use validate::{ensure_non_negative, ensure_not_blank, ensure_present};
pub use value_object::ValueObject;
