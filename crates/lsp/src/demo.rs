//! Console walkthrough: a car refuels and drives, an electric car only drives.

use std::io::Write;

use crate::vehicle::{Car, Drivable, ElectricCar, Refuelable};

pub fn run(out: &mut dyn Write) -> anyhow::Result<()> {
    let car = Car;
    car.refuel(out)?;
    car.drive(out)?;

    ElectricCar.drive(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_car_then_electric_car() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Tanqueando...\nConduciendo...\nConduciendo un coche eléctrico...\n"
        );
    }
}
