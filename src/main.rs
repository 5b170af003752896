use clap::{Parser, Subcommand};

mod cmd;

use cmd::{
    batch::BatchCommand, calc::CalcCommand, compare::CompareCommand, graph::GraphCommand,
    rates::RatesCommand, schema::SchemaCommand,
};

/// Swedish salary tax calculator
#[derive(Parser, Debug)]
#[command(name = "lonekalk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tax breakdown for a single salary
    Calc(CalcCommand),
    /// Compare two salaries side by side
    Compare(CompareCommand),
    /// Show the reference table of tax rates
    Rates(RatesCommand),
    /// Chart data over a salary range
    Graph(GraphCommand),
    /// Tax breakdowns for every row of a CSV file
    Batch(BatchCommand),
    /// Print expected input formats
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calc(cmd) => cmd.exec(),
        Command::Compare(cmd) => cmd.exec(),
        Command::Rates(cmd) => cmd.exec(),
        Command::Graph(cmd) => cmd.exec(),
        Command::Batch(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
