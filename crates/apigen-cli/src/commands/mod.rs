//! CLI command implementations.
//!
//! Each submodule implements one subcommand and returns a semantic
//! [`ExitCode`](apigen_core::cli::ExitCode).

pub mod completions;
pub mod generate;
