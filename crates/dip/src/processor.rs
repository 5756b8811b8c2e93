use std::io::{self, Write};

use solid_lab_core::{DomainResult, ensure_present};

use crate::database::Database;

const MISSING_DATABASE: &str = "La base de datos no puede ser null";

/// High-level policy: processes orders through whatever `Database` it is given.
#[derive(Debug)]
pub struct OrderProcessor<D> {
    database: D,
}

impl<D: Database> OrderProcessor<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    /// Build from a dependency that may not have been resolved.
    pub fn from_optional(database: Option<D>) -> DomainResult<Self> {
        ensure_present(database, MISSING_DATABASE).map(Self::new)
    }

    pub fn database(&self) -> &D {
        &self.database
    }

    pub fn process_order(&self, out: &mut dyn Write) -> io::Result<()> {
        tracing::info!(database = self.database.name(), "processing order");
        writeln!(out, "Procesando pedido...")?;
        self.database.save_order(out)
    }
}
