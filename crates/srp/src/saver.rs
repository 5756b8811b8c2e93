use std::io::{self, Write};

/// Persists invoices. Here that means announcing it on the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoiceDatabaseSaver;

impl InvoiceDatabaseSaver {
    pub fn new() -> Self {
        Self
    }

    pub fn save_to_database(&self, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!("saving invoice");
        writeln!(out, "Guardando factura...")
    }
}
