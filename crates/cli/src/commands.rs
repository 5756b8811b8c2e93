pub mod demo;
pub mod discount;
pub mod invoice;
pub mod order;

use clap::{Parser, Subcommand};
use solid_lab_dip::DatabaseKind;
use solid_lab_ocp::CustomerTier;

#[derive(Parser)]
#[command(name = "solid-lab")]
#[command(about = "Small console examples of the five SOLID principles.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Single Responsibility: invoice, printer and saver
    Srp,
    /// Open/Closed: discount strategies
    Ocp,
    /// Liskov Substitution: cars and electric cars
    Lsp,
    /// Interface Segregation: bots and developers
    Isp,
    /// Dependency Inversion: order processor over a database
    Dip,
    /// Run every demo in order
    #[command(alias = "a")]
    All,
    /// Print an invoice with tax
    #[command(alias = "i")]
    Invoice {
        #[arg(long)]
        customer: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: f64,
        /// Emit a JSON summary instead of console lines
        #[arg(long)]
        json: bool,
    },
    /// Quote a discount for a customer tier
    #[command(alias = "d")]
    Discount {
        /// regular | vip
        #[arg(long)]
        tier: CustomerTier,
        #[arg(long, allow_hyphen_values = true)]
        price: f64,
        /// Emit a JSON quote instead of console lines
        #[arg(long)]
        json: bool,
    },
    /// Process orders against a database backend
    #[command(alias = "o")]
    Order {
        /// mysql | memory
        #[arg(long, default_value = "mysql")]
        database: DatabaseKind,
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
