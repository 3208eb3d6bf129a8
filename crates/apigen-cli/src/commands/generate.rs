//! Go client generation command.
//!
//! Loads the endpoint selection from the artifact directory, runs the
//! generator, writes the Go source, and prints a run summary.

use anyhow::{Context, Result};
use apigen_codegen::{CodeGenerator, SkippedEndpoint};
use apigen_core::cli::{ExitCode, OutputFormat};
use apigen_store::ArtifactStore;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::formatters::format_output;

/// Summary of one generation run, printed after a successful write.
#[derive(Debug, Serialize)]
pub struct GenerationSummary {
    /// Descriptors in the input selection
    pub endpoints_found: usize,
    /// Client functions actually emitted
    pub functions_emitted: usize,
    /// Endpoints skipped for unsupported methods
    pub skipped: Vec<SkippedEndpoint>,
    /// Where the Go source was written
    pub output_path: PathBuf,
}

/// Runs the generate command.
///
/// A missing selection file, malformed JSON, or an empty selection exits
/// with [`ExitCode::INVALID_INPUT`]; unexpected failures propagate as
/// errors.
///
/// # Errors
///
/// Returns an error if generation or the output write fails for reasons
/// other than bad input.
pub fn run(
    dir: Option<PathBuf>,
    base_url: Option<String>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let store = match dir {
        Some(dir) => ArtifactStore::new(dir),
        None => ArtifactStore::default(),
    };

    let endpoints = match store.load_selected() {
        Ok(endpoints) => endpoints,
        Err(err) if err.is_selection_not_found() || err.is_serialization_error() => {
            eprintln!("error: {err}");
            return Ok(ExitCode::INVALID_INPUT);
        }
        Err(err) => return Err(err).context("failed to load endpoint selection"),
    };
    info!(count = endpoints.len(), "loaded endpoint selection");

    let generator = match base_url {
        Some(url) => CodeGenerator::with_base_url(url),
        None => CodeGenerator::new(),
    }
    .context("failed to initialize code generator")?;

    let source = match generator.generate(&endpoints) {
        Ok(source) => source,
        Err(err) if err.is_empty_selection() => {
            eprintln!("error: {err}");
            return Ok(ExitCode::INVALID_INPUT);
        }
        Err(err) => return Err(err).context("code generation failed"),
    };

    let output_path = store
        .save_source(&source.content)
        .context("failed to write generated source")?;
    info!(
        path = %output_path.display(),
        emitted = source.functions_emitted,
        "generation complete"
    );

    let summary = GenerationSummary {
        endpoints_found: source.endpoints_found,
        functions_emitted: source.functions_emitted,
        skipped: source.skipped,
        output_path,
    };
    println!("{}", format_output(&summary, output_format)?);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_missing_selection_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let code = run(
            Some(dir.path().to_path_buf()),
            None,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(code, ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_run_empty_selection_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("selected_apis.json"), "[]").unwrap();

        let code = run(
            Some(dir.path().to_path_buf()),
            None,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(code, ExitCode::INVALID_INPUT);
        assert!(!dir.path().join("generated_client.go").exists());
    }

    #[test]
    fn test_run_malformed_selection_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("selected_apis.json"), "{oops").unwrap();

        let code = run(
            Some(dir.path().to_path_buf()),
            None,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(code, ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_run_generates_client_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("selected_apis.json"),
            r#"[
                {"name": "get user", "method": "GET", "path": "/users/<id>"},
                {"name": "create user", "method": "POST", "path": "/users",
                 "request_body": {"email": "string"}}
            ]"#,
        )
        .unwrap();

        let code = run(
            Some(dir.path().to_path_buf()),
            None,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let content = fs::read_to_string(dir.path().join("generated_client.go")).unwrap();
        assert!(content.starts_with("package main"));
        assert!(content.contains("func GetUser(id string)"));
        assert!(content.contains("func CreateUser(email string)"));
    }

    #[test]
    fn test_run_custom_base_url() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("selected_apis.json"),
            r#"[{"name": "ping", "method": "GET", "path": "/ping"}]"#,
        )
        .unwrap();

        let code = run(
            Some(dir.path().to_path_buf()),
            Some("https://api.internal".to_string()),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let content = fs::read_to_string(dir.path().join("generated_client.go")).unwrap();
        assert!(content.contains("https://api.internal/ping"));
    }
}
