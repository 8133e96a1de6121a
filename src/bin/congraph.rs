//! CLI entry point for the `congraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use congraph::cli::commands;
use congraph::GraphError;

#[derive(Parser)]
#[command(
    name = "congraph",
    about = "congraph CLI — schema-constrained undirected graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a graph document
    Info {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Find the bridges (cut-edges) of a graph document
    Bridges {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Validate a graph document against its schema
    Validate {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Print per-node degrees in insertion order
    Degrees {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Re-emit a normalized document built from the instantiated graph
    Export {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Bridges { file } => commands::cmd_bridges(&file, json),
        Commands::Validate { file } => commands::cmd_validate(&file, json),
        Commands::Degrees { file } => commands::cmd_degrees(&file, json),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            GraphError::NodeNotFound(_) | GraphError::EdgeNotFound(_, _) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
