use std::io::Write;

/// Console demo entry points, in principle order.
pub type DemoFn = fn(&mut dyn Write) -> anyhow::Result<()>;

pub const ALL: [(&str, DemoFn); 5] = [
    ("SRP", solid_lab_srp::demo::run),
    ("OCP", solid_lab_ocp::demo::run),
    ("LSP", solid_lab_lsp::demo::run),
    ("ISP", solid_lab_isp::demo::run),
    ("DIP", solid_lab_dip::demo::run),
];

/// Run every demo, each under a `== NAME ==` header.
pub fn run_all(out: &mut dyn Write) -> anyhow::Result<()> {
    for (name, demo) in ALL {
        tracing::debug!(demo = name, "running demo");
        writeln!(out, "== {name} ==")?;
        demo(out)?;
    }
    Ok(())
}
