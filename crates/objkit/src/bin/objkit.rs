//! `objkit` - structural operations on JSON documents.
//!
//! Usage:
//!   objkit [-v] get <path> [--default <json>]
//!   objkit [-v] set <path> <json>
//!   objkit [-v] merge <overlay-json>
//!   objkit [-v] equal <other-json>
//!   objkit [-v] clone
//!
//! The document is read from stdin; results are written to stdout.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use objkit::cli::{
    assign_path, clone_document, documents_equal, lookup_path, merge_documents, CliError,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "objkit")]
#[command(
    about = "Structural clone, merge, path access and equality for JSON documents",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the value at a dot path
    Get {
        /// Dot-delimited path, e.g. `a.b.0`
        path: String,

        /// JSON value to print when nothing is found
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Write a JSON value at a dot path
    Set {
        /// Dot-delimited path
        path: String,

        /// JSON value to store
        value: String,
    },

    /// Deep-merge an overlay document over the input
    Merge {
        /// Overlay document
        overlay: String,
    },

    /// Compare the input with another document
    Equal {
        /// Document to compare with
        other: String,
    },

    /// Deep-copy the input
    Clone,
}

fn run(command: Commands, doc: &str) -> Result<String, CliError> {
    match command {
        Commands::Get { path, default } => lookup_path(doc, &path, default.as_deref()),
        Commands::Set { path, value } => assign_path(doc, &path, &value),
        Commands::Merge { overlay } => merge_documents(doc, &overlay),
        Commands::Equal { other } => documents_equal(doc, &other).map(|eq| eq.to_string()),
        Commands::Clone => clone_document(doc),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli.command, buf.trim()) {
        Ok(output) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{output}") {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
