//! Console walkthrough: one order processed against MySQL.

use std::io::Write;

use crate::{MySqlDatabase, OrderProcessor};

pub fn run(out: &mut dyn Write) -> anyhow::Result<()> {
    OrderProcessor::new(MySqlDatabase).process_order(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processes_one_order_with_mysql() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Procesando pedido...\nGuardando pedido en MySQL...\n"
        );
    }
}
