//! Dependency Inversion: `OrderProcessor` depends on the `Database`
//! abstraction, never on a concrete store.

pub mod database;
pub mod demo;
pub mod processor;

pub use database::{Database, DatabaseKind, InMemoryDatabase, MySqlDatabase};
pub use processor::OrderProcessor;
