use std::io::{self, Write};

use crate::worker::Staff;

/// A work shift over mixed staff. Each member is only asked for what it
/// supports.
#[derive(Default)]
pub struct Shift {
    staff: Vec<Box<dyn Staff>>,
}

impl Shift {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, member: impl Staff + 'static) -> &mut Self {
        self.staff.push(Box::new(member));
        self
    }

    pub fn len(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    pub fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        for member in &self.staff {
            member.work(out)?;
        }
        tracing::debug!(staff = self.staff.len(), "shift worked");
        Ok(())
    }

    /// Feed the members that eat; returns how many ate.
    pub fn lunch_break(&self, out: &mut dyn Write) -> io::Result<usize> {
        let mut fed = 0;
        for eater in self.staff.iter().filter_map(|m| m.as_eatable()) {
            eater.eat(out)?;
            fed += 1;
        }
        tracing::debug!(fed, "lunch break over");
        Ok(fed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::{Bot, Developer};

    #[test]
    fn everyone_works() {
        let mut shift = Shift::new();
        shift.assign(Bot).assign(Developer);

        let mut out: Vec<u8> = Vec::new();
        shift.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Trabajando...\nEscribiendo código...\n"
        );
    }

    #[test]
    fn only_developers_take_lunch() {
        let mut shift = Shift::new();
        shift.assign(Bot).assign(Developer).assign(Bot).assign(Developer);

        let mut out: Vec<u8> = Vec::new();
        assert_eq!(shift.lunch_break(&mut out).unwrap(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Comiendo...\nComiendo...\n");
    }

    #[test]
    fn bots_only_shift_skips_lunch() {
        let mut shift = Shift::new();
        shift.assign(Bot);

        let mut out: Vec<u8> = Vec::new();
        assert_eq!(shift.lunch_break(&mut out).unwrap(), 0);
        assert!(out.is_empty());
        assert_eq!(shift.len(), 1);
    }
}
