//! Output formatting for annotree results.
//!
//! Provides functions to format an [`AnnotreeResult`] into Markdown, plain
//! text, or JSON, and to write the formatted result to a file.

use crate::{AnnotreeError, AnnotreeResult};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the annotree result into a string.
pub fn format_result(result: &AnnotreeResult, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Markdown => format_markdown(result),
        OutputFormat::Text => format_text(result),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file, overwriting existing content.
pub fn write_result_to_file(
    result: &AnnotreeResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), AnnotreeError> {
    let content = format_result(result, format, pretty);
    fs::write(&path, content).map_err(|e| AnnotreeError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_markdown(result: &AnnotreeResult) -> String {
    let mut out = result.tree.clone();
    if !out.ends_with('\n') { out.push('\n'); }
    out
}

fn format_text(result: &AnnotreeResult) -> String {
    let mut out = result.lines.join("\n");
    out.push('\n');
    out
}

fn format_json(result: &AnnotreeResult, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(result).expect("JSON serialization failed")
    } else {
        serde_json::to_string(result).expect("JSON serialization failed")
    }
}
