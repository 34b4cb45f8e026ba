mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::config::ConfigArgs;
use commands::dashboard::MonthArgs;

/// Juice shop profitability and break-even calculations
#[derive(Parser)]
#[command(
    name = "jfin",
    version,
    about = "Monthly profitability and break-even analysis for a juice shop",
    long_about = "Derives gross, operating and net margins, contribution margin, the \
                  break-even sales level and a traffic-light profitability class from \
                  one month of revenue and costs, with decimal precision. Also produces \
                  the cost/revenue series behind the break-even chart."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    #[command(flatten)]
    config: ConfigArgs,

    /// Log diagnostics to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Margins, break-even point, cost breakdown and profitability class
    Metrics(MonthArgs),
    /// Cost and revenue lines for the break-even chart
    Series(MonthArgs),
    /// Full dashboard snapshot: metrics plus break-even series
    Dashboard(MonthArgs),
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
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Metrics(args) => commands::dashboard::run_metrics(args, &cli.config),
        Commands::Series(args) => commands::dashboard::run_series(args, &cli.config),
        Commands::Dashboard(args) => commands::dashboard::run_dashboard(args, &cli.config),
        Commands::Version => {
            println!("jfin {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
