use std::io::Write;

use solid_lab_dip::{Database, DatabaseKind, OrderProcessor};

pub fn order(database: DatabaseKind, count: u32, out: &mut dyn Write) -> anyhow::Result<()> {
    let processor = OrderProcessor::new(database.open());
    for _ in 0..count {
        processor.process_order(out)?;
    }
    tracing::info!(database = processor.database().name(), count, "orders processed");
    Ok(())
}
