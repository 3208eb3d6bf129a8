//! apigen command-line interface.
//!
//! Turns a selected set of API endpoint descriptors into a ready-to-use
//! Go client source file.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Render the Go client from a selection file
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Generate from the default artifact directory (./output)
//! apigen generate
//!
//! # Custom directory and base URL
//! apigen generate --dir ./build --base-url https://api.internal
//! ```

use anyhow::Result;
use apigen_core::cli::{ExitCode, OutputFormat};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
pub mod formatters;

/// apigen - Go API client generation from endpoint selections.
///
/// Reads a JSON selection of endpoint descriptors and emits one Go
/// HTTP-client function per supported endpoint.
#[derive(Parser, Debug)]
#[command(name = "apigen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a Go client from a selected endpoint set.
    ///
    /// Reads `selected_apis.json` from the artifact directory and writes
    /// `generated_client.go` next to it. Endpoints with unsupported HTTP
    /// methods are skipped and reported in the summary.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Default artifact directory (./output)
    /// apigen generate
    ///
    /// # Custom directory
    /// apigen generate --dir ./build
    ///
    /// # Custom base URL (or set APIGEN_BASE_URL)
    /// apigen generate --base-url https://api.internal
    /// ```
    Generate {
        /// Artifact directory holding the selection file and receiving
        /// the generated source (default: ./output)
        #[arg(short, long, env = "APIGEN_OUTPUT_DIR")]
        dir: Option<PathBuf>,

        /// Base URL prepended to every endpoint path
        /// (default: https://api.example.com)
        #[arg(long, env = "APIGEN_BASE_URL")]
        base_url: Option<String>,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = execute_command(cli.command, output_format)?;

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging infrastructure.
///
/// Sets up tracing with appropriate log levels based on verbosity flag.
/// Logs go to stderr so stdout stays clean for command output.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate { dir, base_url } => {
            commands::generate::run(dir, base_url, output_format)
        }
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
