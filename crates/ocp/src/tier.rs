use core::str::FromStr;

use solid_lab_core::DomainError;

use crate::calculator::DiscountCalculator;
use crate::discount::{DiscountStrategy, RegularCustomerDiscount, VipCustomerDiscount};

/// Built-in customer tiers, each mapped to its discount strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerTier {
    Regular,
    Vip,
}

impl CustomerTier {
    pub const ALL: [CustomerTier; 2] = [CustomerTier::Regular, CustomerTier::Vip];

    /// Label used in console output ("Cliente Regular", "Cliente VIP").
    pub fn label(self) -> &'static str {
        match self {
            CustomerTier::Regular => "Regular",
            CustomerTier::Vip => "VIP",
        }
    }

    pub fn strategy(self) -> Box<dyn DiscountStrategy> {
        match self {
            CustomerTier::Regular => Box::new(RegularCustomerDiscount),
            CustomerTier::Vip => Box::new(VipCustomerDiscount),
        }
    }

    pub fn calculator(self) -> DiscountCalculator {
        DiscountCalculator::from_boxed(self.strategy())
    }
}

impl FromStr for CustomerTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(CustomerTier::Regular),
            "vip" => Ok(CustomerTier::Vip),
            _ => Err(DomainError::unknown("customer tier", s)),
        }
    }
}
