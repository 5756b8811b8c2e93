fn main() -> anyhow::Result<()> {
    solid_lab_observability::init();

    let stdout = std::io::stdout();
    solid_lab_srp::demo::run(&mut stdout.lock())
}
