//! Output formatters for CLI commands.
//!
//! Provides consistent formatting across all CLI commands for JSON, text,
//! and pretty output modes.

use anyhow::Result;
use apigen_core::cli::OutputFormat;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

/// Format data according to the specified output format.
///
/// Json is pretty-printed for machine-plus-human use, text is compact JSON
/// for piping, and pretty is a colorized key/value rendering for terminals.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use apigen_cli::formatters::format_output;
/// use apigen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     functions_emitted: usize,
/// }
///
/// let output = format_output(&Summary { functions_emitted: 3 }, OutputFormat::Json)?;
/// assert!(output.contains("\"functions_emitted\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(serde_json::to_string(data)?),
        OutputFormat::Pretty => pretty(data),
    }
}

/// Colorized human-readable rendering.
fn pretty<T: Serialize>(data: &T) -> Result<String> {
    let value = serde_json::to_value(data)?;
    Ok(pretty_value(&value, 0))
}

/// Renders a JSON value as indented key/value lines.
///
/// Top-level objects become one `key: value` line per field; objects
/// nested in arrays are rendered inline as `k=v` pairs.
fn pretty_value(value: &Value, indent: usize) -> String {
    match value {
        Value::Null => "-".dimmed().to_string(),
        Value::Bool(b) => b.to_string().yellow().to_string(),
        Value::Number(n) => n.to_string().cyan().to_string(),
        Value::String(s) => s.green().to_string(),
        Value::Array(items) => {
            if items.is_empty() {
                return "(none)".dimmed().to_string();
            }
            let pad = "  ".repeat(indent + 1);
            let mut out = String::new();
            for item in items {
                out.push('\n');
                out.push_str(&pad);
                out.push_str("- ");
                out.push_str(&pretty_value(item, indent + 1));
            }
            out
        }
        Value::Object(map) => {
            if indent == 0 {
                let mut lines = Vec::with_capacity(map.len());
                for (key, val) in map {
                    lines.push(format!(
                        "{}: {}",
                        key.blue().bold(),
                        pretty_value(val, indent + 1)
                    ));
                }
                lines.join("\n")
            } else {
                map.iter()
                    .map(|(key, val)| format!("{key}={}", pretty_value(val, indent + 1)))
                    .collect::<Vec<_>>()
                    .join(" ")
            }
        }
    }
}
