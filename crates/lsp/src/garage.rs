use std::io::{self, Write};

use crate::vehicle::Vehicle;

/// Mixed fleet handled only through the `Vehicle` contract.
#[derive(Default)]
pub struct Garage {
    vehicles: Vec<Box<dyn Vehicle>>,
}

impl Garage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn park(&mut self, vehicle: impl Vehicle + 'static) -> &mut Self {
        self.vehicles.push(Box::new(vehicle));
        self
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn drive_all(&self, out: &mut dyn Write) -> io::Result<()> {
        for vehicle in &self.vehicles {
            vehicle.drive(out)?;
        }
        tracing::debug!(vehicles = self.vehicles.len(), "fleet driven");
        Ok(())
    }

    /// Refuel every vehicle with a tank; returns how many were refuelled.
    pub fn refuel_all(&self, out: &mut dyn Write) -> io::Result<usize> {
        let mut refuelled = 0;
        for tank in self.vehicles.iter().filter_map(|v| v.fuel_tank()) {
            tank.refuel(out)?;
            refuelled += 1;
        }
        tracing::debug!(refuelled, skipped = self.vehicles.len() - refuelled, "fleet refuelled");
        Ok(refuelled)
    }
}
