use std::io::{self, Write};

use solid_lab_core::{ConsoleResult, ensure_present, format_decimal};

use crate::invoice::Invoice;

const MISSING_INVOICE: &str = "La factura no puede ser null";

/// Renders invoices to a console sink. Its only job is formatting.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoicePrinter;

impl InvoicePrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_invoice(&self, invoice: &Invoice, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Factura para: {}", invoice.customer_name())?;
        writeln!(out, "Total: {}", format_decimal(invoice.calculate_total()))?;
        tracing::debug!(customer = invoice.customer_name(), "invoice printed");
        Ok(())
    }

    /// Print an invoice that may be absent. `None` is an invalid argument and
    /// nothing is written.
    pub fn print_optional(
        &self,
        invoice: Option<&Invoice>,
        out: &mut dyn Write,
    ) -> ConsoleResult<()> {
        let invoice = ensure_present(invoice, MISSING_INVOICE)?;
        self.print_invoice(invoice, out)?;
        Ok(())
    }
}
