use std::io::{self, Write};

pub trait Workable {
    fn work(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub trait Eatable {
    fn eat(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A member of staff. Work is mandatory; eating is an optional capability
/// exposed through `as_eatable`.
pub trait Staff: Workable {
    fn as_eatable(&self) -> Option<&dyn Eatable> {
        None
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Bot;

impl Workable for Bot {
    fn work(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Trabajando...")
    }
}

impl Staff for Bot {}

#[derive(Debug, Default, Clone, Copy)]
pub struct Developer;

impl Workable for Developer {
    fn work(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Escribiendo código...")
    }
}

impl Eatable for Developer {
    fn eat(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Comiendo...")
    }
}

impl Staff for Developer {
    fn as_eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut out: Vec<u8> = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bot_works() {
        assert!(capture(|out| Bot.work(out)).contains("Trabajando"));
    }

    #[test]
    fn developer_writes_code() {
        assert!(capture(|out| Developer.work(out)).contains("código"));
    }

    #[test]
    fn developer_eats() {
        assert_eq!(capture(|out| Developer.eat(out)), "Comiendo...\n");
    }

    #[test]
    fn bot_is_not_eatable() {
        assert!(Bot.as_eatable().is_none());
    }

    #[test]
    fn developer_is_workable_and_eatable() {
        let staff: &dyn Staff = &Developer;
        assert!(staff.as_eatable().is_some());
        assert!(capture(|out| staff.work(out)).contains("código"));
    }
}
