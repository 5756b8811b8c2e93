//! Console walkthrough: each type does one job.

use std::io::Write;

use anyhow::Context;

use crate::{Invoice, InvoiceDatabaseSaver, InvoicePrinter};

pub fn run(out: &mut dyn Write) -> anyhow::Result<()> {
    let invoice = Invoice::new("Cristian", 20.0).context("building demo invoice")?;
    InvoicePrinter::new().print_invoice(&invoice, out)?;
    InvoiceDatabaseSaver::new().save_to_database(out)?;
    Ok(())
}
