//! Open/Closed: `DiscountCalculator` is closed for modification and open for
//! extension through `DiscountStrategy`.

pub mod calculator;
pub mod demo;
pub mod discount;
pub mod tier;

pub use calculator::{DiscountCalculator, DiscountQuote};
pub use discount::{
    DiscountStrategy, PercentageDiscount, RegularCustomerDiscount, VipCustomerDiscount,
    validate_price,
};
pub use tier::CustomerTier;
