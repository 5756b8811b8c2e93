//! Monetary amounts and their console rendering.

use crate::error::DomainResult;
use crate::value_object::ValueObject;

/// Non-negative monetary amount; NaN is rejected.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    /// Validate `value` and wrap it. `message` is used verbatim on rejection.
    pub fn try_new(value: f64, message: &str) -> DomainResult<Self> {
        crate::validate::ensure_non_negative(value, message).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for Amount {}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&format_decimal(self.0))
    }
}

/// Magnitudes in `[PLAIN_MIN, PLAIN_MAX)` render as plain decimals.
const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Render a float with the shortest round-trip digits and at least one
/// fractional digit.
///
/// - `[1e-3, 1e7)` and zero: plain decimal (`121.0`, `181.5`, `-10.0`).
/// - Otherwise: `<mantissa>E<exp>` (`1.21E7`, `1.21E-4`, `1.0E10`).
/// - Non-finite: `NaN`, `Infinity`, `-Infinity`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        return with_fraction(value.to_string());
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => format!("{}E{exponent}", with_fraction(mantissa.to_string())),
        None => with_fraction(scientific),
    }
}

fn with_fraction(mut digits: String) -> String {
    if !digits.contains('.') {
        digits.push_str(".0");
    }
    digits
}
