use std::io::Write;

use anyhow::Context;
use solid_lab_srp::{Invoice, InvoiceDatabaseSaver, InvoicePrinter};

pub fn invoice(customer: &str, amount: f64, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let invoice = Invoice::new(customer, amount).context("rejected invoice")?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &invoice.summary())?;
        writeln!(out)?;
        return Ok(());
    }

    InvoicePrinter::new().print_invoice(&invoice, out)?;
    InvoiceDatabaseSaver::new().save_to_database(out)?;
    Ok(())
}
