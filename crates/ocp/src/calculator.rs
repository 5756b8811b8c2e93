use serde::Serialize;

use solid_lab_core::DomainResult;

use crate::discount::DiscountStrategy;

/// Applies whatever strategy it was built with. Closed for modification: new
/// discount rules never touch this type.
pub struct DiscountCalculator {
    strategy: Box<dyn DiscountStrategy>,
}

impl core::fmt::Debug for DiscountCalculator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DiscountCalculator")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Result of quoting a price, used for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountQuote {
    pub strategy: String,
    pub price: f64,
    pub discount: f64,
    pub total: f64,
}

impl DiscountCalculator {
    pub fn new(strategy: impl DiscountStrategy + 'static) -> Self {
        Self::from_boxed(Box::new(strategy))
    }

    pub fn from_boxed(strategy: Box<dyn DiscountStrategy>) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn calculate(&self, price: f64) -> DomainResult<f64> {
        let discount = self.strategy.calculate_discount(price)?;
        tracing::debug!(strategy = self.strategy.name(), price, discount, "discount calculated");
        Ok(discount)
    }

    pub fn total_after_discount(&self, price: f64) -> DomainResult<f64> {
        Ok(price - self.calculate(price)?)
    }

    pub fn quote(&self, price: f64) -> DomainResult<DiscountQuote> {
        let discount = self.calculate(price)?;
        Ok(DiscountQuote {
            strategy: self.strategy.name().to_string(),
            price,
            discount,
            total: price - discount,
        })
    }
}
