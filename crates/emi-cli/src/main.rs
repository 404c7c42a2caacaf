mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::emi::EmiArgs;
use commands::insights::InsightsArgs;
use commands::prepayment::PrepaymentArgs;

/// Loan EMI, comparison and prepayment calculations
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Loan EMI, comparison and prepayment calculations",
    long_about = "A CLI for equated monthly installment calculations with decimal \
                  precision. Supports single-loan EMI, side-by-side loan comparison, \
                  prepayment simulation and affordability insights."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the EMI, total payment and total interest of a loan
    Emi(EmiArgs),
    /// Compare several loan options side by side
    Compare(CompareArgs),
    /// Simulate payoff with monthly, yearly or one-time prepayments
    Prepayment(PrepaymentArgs),
    /// Principal/interest breakdown and affordability band
    Insights(InsightsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Prepayment(args) => commands::prepayment::run_prepayment(args),
        Commands::Insights(args) => commands::insights::run_insights(args),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
