use std::io::{self, Write};

/// Something that can take fuel.
pub trait Refuelable {
    fn refuel(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Something that can be driven. Every implementor must honour the same
/// contract: driving succeeds and reports itself on the sink.
pub trait Drivable {
    fn drive(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A drivable vehicle that may also have a fuel tank.
///
/// Vehicles without a tank never pretend to have one; callers ask instead of
/// assuming.
pub trait Vehicle: Drivable {
    fn fuel_tank(&self) -> Option<&dyn Refuelable> {
        None
    }
}

/// Combustion car: drives and refuels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Car;

impl Refuelable for Car {
    fn refuel(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Tanqueando...")
    }
}

impl Drivable for Car {
    fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Conduciendo...")
    }
}

impl Vehicle for Car {
    fn fuel_tank(&self) -> Option<&dyn Refuelable> {
        Some(self)
    }
}

/// Electric car: drives only.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElectricCar;

impl Drivable for ElectricCar {
    fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Conduciendo un coche eléctrico...")
    }
}

impl Vehicle for ElectricCar {}
