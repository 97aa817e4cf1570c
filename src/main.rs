//! Trellis CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Expand parent-child edges into level-flattened hierarchy tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a hierarchy from a JSON edge file and print the table
    Build {
        /// JSON file holding an array of [parent, child] pairs
        #[arg(short, long)]
        input: PathBuf,

        /// Value written into padded cells
        #[arg(long, default_value = "")]
        empty_value: String,

        /// Omit the trailing primary-key column
        #[arg(long)]
        no_primkey: bool,

        /// Prefix for level column labels
        #[arg(long, default_value = trellis_core::DEFAULT_LEVEL_LABEL)]
        level_label: String,

        /// Label for the primary-key column
        #[arg(long, default_value = trellis_core::DEFAULT_PRIMKEY_LABEL)]
        primkey_label: String,
    },
    /// Read edges from the configured store, build, and write the table back
    Export {
        /// TOML configuration file
        #[arg(short, long, default_value = "trellis.toml")]
        config: PathBuf,

        /// Policy when the destination table exists: fail, append, replace
        #[arg(long, default_value = "fail")]
        on_conflict: String,

        /// Value written into padded cells
        #[arg(long, default_value = "")]
        empty_value: String,

        /// Omit the trailing primary-key column
        #[arg(long)]
        no_primkey: bool,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("trellis={}", log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Build {
            input,
            empty_value,
            no_primkey,
            level_label,
            primkey_label,
        } => commands::build(input, empty_value, !no_primkey, level_label, primkey_label),
        Commands::Export {
            config,
            on_conflict,
            empty_value,
            no_primkey,
        } => commands::export(config, &on_conflict, empty_value, !no_primkey),
        Commands::Version => {
            println!("trellis v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
