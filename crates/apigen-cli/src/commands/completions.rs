//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, and `PowerShell`.

use anyhow::Result;
use apigen_core::cli::ExitCode;
use clap::Command;
use clap_complete::{generate, Shell};
use std::io;
use tracing::info;

/// Generates shell completion script for the specified shell.
///
/// Prints the completion script to stdout, which can be sourced or saved
/// to the appropriate location for the shell.
pub fn generate_completions(shell: Shell, cmd: &mut Command) {
    info!("Generating {} completions", shell);
    generate(shell, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Runs the completions command.
///
/// # Errors
///
/// Never fails; the `Result` keeps the command signatures uniform.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    generate_completions(shell, cmd);
    Ok(ExitCode::SUCCESS)
}
