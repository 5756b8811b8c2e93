mod commands;

use commands::{CommandLine, Commands, demo, discount, invoice, order};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    solid_lab_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match commands.command {
        Commands::Srp => solid_lab_srp::demo::run(&mut out),
        Commands::Ocp => solid_lab_ocp::demo::run(&mut out),
        Commands::Lsp => solid_lab_lsp::demo::run(&mut out),
        Commands::Isp => solid_lab_isp::demo::run(&mut out),
        Commands::Dip => solid_lab_dip::demo::run(&mut out),
        Commands::All => demo::run_all(&mut out),
        Commands::Invoice {
            customer,
            amount,
            json,
        } => invoice::invoice(&customer, amount, json, &mut out),
        Commands::Discount { tier, price, json } => discount::discount(tier, price, json, &mut out),
        Commands::Order { database, count } => order::order(database, count, &mut out),
    }
}
