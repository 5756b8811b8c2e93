//! Interface Segregation: working and eating are separate traits, so a bot
//! is never forced to implement `eat`.

pub mod demo;
pub mod shift;
pub mod worker;

pub use shift::Shift;
pub use worker::{Bot, Developer, Eatable, Staff, Workable};
