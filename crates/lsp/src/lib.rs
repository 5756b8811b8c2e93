//! Liskov Substitution: every `Drivable` can stand in for any other. Fuel is
//! split into its own trait so an electric car never has to fake `refuel`.

pub mod demo;
pub mod garage;
pub mod vehicle;

pub use garage::Garage;
pub use vehicle::{Car, Drivable, ElectricCar, Refuelable, Vehicle};
