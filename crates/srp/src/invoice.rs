use serde::Serialize;

use solid_lab_core::{Amount, DomainResult, ValueObject, ensure_not_blank, ensure_present};

/// Tax applied on top of the invoice amount (21%).
pub const TAX_RATE: f64 = 1.21;

pub(crate) const BLANK_CUSTOMER: &str = "El cliente no puede ser nulo o vacío";
pub(crate) const NEGATIVE_AMOUNT: &str = "El monto no puede ser negativo";

/// Invoice data: who is billed and for how much.
///
/// Only holds and derives data. Printing lives in [`crate::InvoicePrinter`],
/// persistence in [`crate::InvoiceDatabaseSaver`].
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    customer: String,
    amount: Amount,
}

impl Invoice {
    /// Build an invoice; the customer name is stored trimmed.
    pub fn new(customer: &str, amount: f64) -> DomainResult<Self> {
        let customer = ensure_not_blank(customer, BLANK_CUSTOMER)?;
        let amount = Amount::try_new(amount, NEGATIVE_AMOUNT)?;

        tracing::debug!(customer, amount = amount.value(), "invoice created");

        Ok(Self {
            customer: customer.to_string(),
            amount,
        })
    }

    /// Same as [`Invoice::new`], for callers whose customer may be absent.
    pub fn from_optional(customer: Option<&str>, amount: f64) -> DomainResult<Self> {
        Self::new(ensure_present(customer, BLANK_CUSTOMER)?, amount)
    }

    pub fn customer_name(&self) -> &str {
        &self.customer
    }

    pub fn amount(&self) -> f64 {
        self.amount.value()
    }

    pub fn calculate_total(&self) -> f64 {
        self.amount.value() * TAX_RATE
    }

    pub fn summary(&self) -> InvoiceSummary {
        InvoiceSummary {
            customer: self.customer.clone(),
            amount: self.amount(),
            total: self.calculate_total(),
        }
    }
}

impl ValueObject for Invoice {}

/// Flattened view of an invoice, used for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceSummary {
    pub customer: String,
    pub amount: f64,
    pub total: f64,
}
