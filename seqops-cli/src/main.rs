mod condition;
mod find;
mod map;
mod output;
mod reduce;
mod values;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an operation with a fixed operand to each value.
    Map(map::Map),
    /// Print the first value that matches all conditions.
    Find(find::Find),
    /// Print all values that match all conditions.
    FindAll(find::FindAll),
    /// Print the first value.
    First(values::Values),
    /// Reduce the values with a named operation or a summing block.
    ///
    /// Without a seed the first value is the initial accumulator.
    Reduce(reduce::Reduce),
    /// Print the smallest value.
    Min(values::Values),
    /// Print the largest value.
    Max(values::Values),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Map(map) => {
            map.run()?;
        }
        Commands::Find(find) => {
            find.run()?;
        }
        Commands::FindAll(find_all) => {
            find_all.run()?;
        }
        Commands::First(values) => {
            values.first()?;
        }
        Commands::Reduce(reduce) => {
            reduce.run()?;
        }
        Commands::Min(values) => {
            values.min()?;
        }
        Commands::Max(values) => {
            values.max()?;
        }
    }
    Ok(())
}
