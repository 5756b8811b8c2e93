use std::io::Write;

use anyhow::Context;
use solid_lab_core::format_decimal;
use solid_lab_ocp::CustomerTier;

pub fn discount(tier: CustomerTier, price: f64, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let quote = tier
        .calculator()
        .quote(price)
        .context("rejected discount quote")?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &quote)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Descuento Cliente {}: {}", tier.label(), format_decimal(quote.discount))?;
    writeln!(
        out,
        "Total después de descuento Cliente {}: {}",
        tier.label(),
        format_decimal(quote.total)
    )?;
    Ok(())
}
