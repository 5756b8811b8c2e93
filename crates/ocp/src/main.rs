fn main() -> anyhow::Result<()> {
    solid_lab_observability::init();

    let stdout = std::io::stdout();
    solid_lab_ocp::demo::run(&mut stdout.lock())
}
