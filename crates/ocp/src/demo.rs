//! Console walkthrough: one calculator, two interchangeable strategies.

use std::io::Write;

use solid_lab_core::format_decimal;

use crate::tier::CustomerTier;

const DEMO_PRICE: f64 = 10.0;

pub fn run(out: &mut dyn Write) -> anyhow::Result<()> {
    for tier in CustomerTier::ALL {
        let calculator = tier.calculator();
        let discount = calculator.calculate(DEMO_PRICE)?;
        let total = calculator.total_after_discount(DEMO_PRICE)?;

        writeln!(out, "Descuento Cliente {}: {}", tier.label(), format_decimal(discount))?;
        writeln!(
            out,
            "Total después de descuento Cliente {}: {}",
            tier.label(),
            format_decimal(total)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_regular_then_vip() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Descuento Cliente Regular: 1.0\n\
             Total después de descuento Cliente Regular: 9.0\n\
             Descuento Cliente VIP: 2.0\n\
             Total después de descuento Cliente VIP: 8.0\n"
        );
    }
}
