//! qubo CLI - inspect, normalize and evaluate saved binary quadratic models.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qubo_io::commands;
use qubo_io::SaveOptions;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "qubo")]
#[command(version)]
#[command(about = "Work with binary quadratic models saved as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the energy of a bitstring
    Evaluate {
        /// Path to a saved model
        #[arg(short, long)]
        qubo: PathBuf,

        /// Bits assigned to variables 0, 1, 2, ...
        #[arg(short, long)]
        bitstring: String,
    },

    /// Load a model and save it back in canonical form
    Normalize {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Indent the output document
        #[arg(long)]
        pretty: bool,
    },

    /// Summarize a saved model
    Inspect {
        #[arg(short, long)]
        qubo: PathBuf,
    },
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Evaluate { qubo, bitstring } => {
            debug!("Evaluating {:?} against {:?}", bitstring, qubo);
            let energy = commands::evaluate(&qubo, &bitstring).with_context(|| {
                format!("Failed to evaluate bitstring {bitstring:?} against {qubo:?}")
            })?;
            println!("{energy}");
        }

        Commands::Normalize {
            input,
            output,
            pretty,
        } => {
            let bqm = commands::normalize(&input, &output, SaveOptions { pretty })
                .with_context(|| format!("Failed to normalize {input:?} into {output:?}"))?;
            info!("Wrote {} variables to {:?}", bqm.num_variables(), output);
        }

        Commands::Inspect { qubo } => {
            let summary = commands::inspect(&qubo)
                .with_context(|| format!("Failed to load model from {qubo:?}"))?;
            println!("{summary}");
        }
    }

    Ok(())
}
