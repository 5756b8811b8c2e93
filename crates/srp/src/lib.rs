//! Single Responsibility: invoice data, printing and saving live in three
//! separate types, each with one reason to change.

pub mod demo;
pub mod invoice;
pub mod printer;
pub mod saver;

pub use invoice::{Invoice, InvoiceSummary, TAX_RATE};
pub use printer::InvoicePrinter;
pub use saver::InvoiceDatabaseSaver;
