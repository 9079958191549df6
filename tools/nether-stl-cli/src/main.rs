//! nether-stl - STL mesh inspection and conversion tool
//!
//! Reads ASCII or binary STL (auto-detected) and writes either encoding.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nether-stl")]
#[command(about = "Nethercore STL mesh tool")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print encoding, triangle count, solid names and bounds
    Info {
        /// Input STL file
        input: PathBuf,
    },

    /// Re-encode an STL file
    Convert {
        /// Input STL file
        input: PathBuf,

        /// Output STL file (default: <input>.<encoding>.stl)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output encoding (default: the opposite of the input)
        #[arg(short, long, value_enum)]
        to: Option<Encoding>,
    },

    /// Decode a file and report whether it is valid
    Check {
        /// Input STL file
        input: PathBuf,

        /// Require endsolid to repeat the solid name
        #[arg(long)]
        strict: bool,
    },
}

/// Output encoding selected on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    Ascii,
    Binary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info { input } => commands::info(&input)?,

        Commands::Convert { input, output, to } => {
            commands::convert(&input, output.as_deref(), to)?;
            tracing::info!("Done!");
        }

        Commands::Check { input, strict } => commands::check(&input, strict)?,
    }

    Ok(())
}
