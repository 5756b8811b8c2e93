//! Console walkthrough: a bot works; a developer works and eats.

use std::io::Write;

use crate::worker::{Bot, Developer, Eatable, Workable};

pub fn run(out: &mut dyn Write) -> anyhow::Result<()> {
    Bot.work(out)?;

    let developer = Developer;
    developer.work(out)?;
    developer.eat(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_bot_then_developer() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Trabajando...\nEscribiendo código...\nComiendo...\n"
        );
    }
}
