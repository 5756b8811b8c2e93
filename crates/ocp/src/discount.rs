use solid_lab_core::{DomainError, DomainResult, ensure_non_negative, format_decimal};

/// Discount rule, chosen and injected at construction time.
///
/// New rules are added by implementing this trait; nothing that consumes a
/// strategy changes. Any `Fn(f64) -> DomainResult<f64>` closure is a strategy
/// too.
pub trait DiscountStrategy {
    /// Discount for `price`. Negative prices are an invalid argument.
    fn calculate_discount(&self, price: f64) -> DomainResult<f64>;

    fn validate_price(&self, price: f64) -> DomainResult<()> {
        validate_price(price)
    }

    /// Short name used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Price check shared by every strategy, including closures.
pub fn validate_price(price: f64) -> DomainResult<()> {
    let message = format!(
        "El precio no puede ser negativo. Precio: {}",
        format_decimal(price)
    );
    ensure_non_negative(price, &message).map(|_| ())
}

impl<F> DiscountStrategy for F
where
    F: Fn(f64) -> DomainResult<f64>,
{
    fn calculate_discount(&self, price: f64) -> DomainResult<f64> {
        self(price)
    }
}

/// 10% off.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegularCustomerDiscount;

impl RegularCustomerDiscount {
    pub const RATE: f64 = 0.1;
}

impl DiscountStrategy for RegularCustomerDiscount {
    fn calculate_discount(&self, price: f64) -> DomainResult<f64> {
        self.validate_price(price)?;
        Ok(price * Self::RATE)
    }

    fn name(&self) -> &str {
        "regular"
    }
}

/// 20% off.
#[derive(Debug, Default, Clone, Copy)]
pub struct VipCustomerDiscount;

impl VipCustomerDiscount {
    pub const RATE: f64 = 0.2;
}

impl DiscountStrategy for VipCustomerDiscount {
    fn calculate_discount(&self, price: f64) -> DomainResult<f64> {
        self.validate_price(price)?;
        Ok(price * Self::RATE)
    }

    fn name(&self) -> &str {
        "vip"
    }
}

/// Flat percentage discount with a rate in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageDiscount {
    rate: f64,
}

impl PercentageDiscount {
    pub fn new(rate: f64) -> DomainResult<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(DomainError::invalid_argument(format!(
                "El porcentaje de descuento debe estar entre 0 y 1. Porcentaje: {}",
                format_decimal(rate)
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn calculate_discount(&self, price: f64) -> DomainResult<f64> {
        self.validate_price(price)?;
        Ok(price * self.rate)
    }

    fn name(&self) -> &str {
        "percentage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_is_ten_percent() {
        assert!((RegularCustomerDiscount.calculate_discount(100.0).unwrap() - 10.0).abs() < 0.01);
    }

    #[test]
    fn vip_is_twenty_percent() {
        assert!((VipCustomerDiscount.calculate_discount(100.0).unwrap() - 20.0).abs() < 0.01);
    }

    #[test]
    fn negative_price_message_includes_price() {
        let err = RegularCustomerDiscount.calculate_discount(-10.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_argument("El precio no puede ser negativo. Precio: -10.0")
        );
    }

    #[test]
    fn closures_are_strategies() {
        let bronze = |price: f64| -> DomainResult<f64> {
            validate_price(price)?;
            Ok(price * 0.05)
        };
        assert!((bronze.calculate_discount(100.0).unwrap() - 5.0).abs() < 0.01);
        assert!(bronze.calculate_discount(-1.0).is_err());
        assert_eq!(bronze.name(), "custom");
    }

    #[test]
    fn percentage_rate_must_be_a_fraction() {
        assert!(PercentageDiscount::new(-0.1).is_err());
        assert!(PercentageDiscount::new(1.5).is_err());
        assert!(PercentageDiscount::new(f64::NAN).is_err());
        assert_eq!(PercentageDiscount::new(0.15).unwrap().rate(), 0.15);
    }

    #[test]
    fn percentage_validates_price() {
        let student = PercentageDiscount::new(0.15).unwrap();
        assert!(student.calculate_discount(-5.0).is_err());
        assert!((student.calculate_discount(100.0).unwrap() - 15.0).abs() < 0.01);
    }
}
