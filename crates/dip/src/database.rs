use core::cell::Cell;
use core::str::FromStr;
use std::io::{self, Write};

use solid_lab_core::DomainError;

/// Storage abstraction the order processor depends on.
pub trait Database {
    fn save_order(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<D: Database + ?Sized> Database for Box<D> {
    fn save_order(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).save_order(out)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<D: Database + ?Sized> Database for &D {
    fn save_order(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).save_order(out)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDatabase;

impl Database for MySqlDatabase {
    fn save_order(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Guardando pedido en MySQL...")
    }

    fn name(&self) -> &str {
        "mysql"
    }
}

/// Process-local store that only counts what it was asked to save.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    saved: Cell<u64>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> u64 {
        self.saved.get()
    }
}

impl Database for InMemoryDatabase {
    fn save_order(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Guardando pedido en memoria...")?;
        self.saved.set(self.saved.get() + 1);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Backends selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    Mysql,
    Memory,
}

impl DatabaseKind {
    pub fn open(self) -> Box<dyn Database> {
        match self {
            DatabaseKind::Mysql => Box::new(MySqlDatabase),
            DatabaseKind::Memory => Box::new(InMemoryDatabase::new()),
        }
    }
}

impl FromStr for DatabaseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(DatabaseKind::Mysql),
            "memory" => Ok(DatabaseKind::Memory),
            _ => Err(DomainError::unknown("database", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mysql_announces_itself() {
        let mut out: Vec<u8> = Vec::new();
        MySqlDatabase.save_order(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("MySQL"));
    }

    #[test]
    fn in_memory_counts_saves() {
        let db = InMemoryDatabase::new();
        let mut out: Vec<u8> = Vec::new();
        db.save_order(&mut out).unwrap();
        db.save_order(&mut out).unwrap();
        assert_eq!(db.saved(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Guardando pedido en memoria...\nGuardando pedido en memoria...\n"
        );
    }

    #[test]
    fn kinds_parse_and_open() {
        assert_eq!("MySQL".parse::<DatabaseKind>().unwrap(), DatabaseKind::Mysql);
        assert_eq!(DatabaseKind::Memory.open().name(), "memory");
        assert_eq!(
            "oracle".parse::<DatabaseKind>().unwrap_err(),
            DomainError::unknown("database", "oracle")
        );
    }
}
