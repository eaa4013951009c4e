//! Command-line interface for annotree.
//!
//! Reads a newline-separated list of paths from stdin and writes the
//! annotated tree document to the output file:
//!
//! ```text
//! find . -type f | annotree <repo> <display_name> <annotations.yml> <output.md>
//! ```

use annotree::{AnnotreeBuilder, AnnotreeOptions, AnnotreeResult, annotree, output};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::exit;

/// annotree — annotated directory tree generator
#[derive(Parser)]
#[command(name = "annotree", version, about, long_about = None)]
struct Cli {
    /// Repository identifier (selects the annotation sub-map)
    repo: String,

    /// Display name used as the root label of the tree
    display_name: String,

    /// YAML annotation file (repository -> path -> comment)
    annotations: PathBuf,

    /// Output file (overwritten if it exists)
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Text,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => output::OutputFormat::Markdown,
            OutputFormat::Text => output::OutputFormat::Text,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (AnnotreeOptions, PathBuf, OutputFormat, bool) {
        let options = AnnotreeBuilder::new(self.repo)
            .display_name(self.display_name)
            .annotations_file(self.annotations)
            .build();

        (options, self.output, self.format, self.pretty)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, output_path, format, pretty) = cli.into_options();

    let mut paths_input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut paths_input) {
        eprintln!("Error: failed to read paths from stdin: {}", e);
        exit(1);
    }

    match annotree(&paths_input, &options) {
        Ok(result) => write_output(&result, format, &output_path, pretty),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn write_output(result: &AnnotreeResult, format: OutputFormat, path: &Path, pretty: bool) {
    match output::write_result_to_file(result, format.into(), path, pretty) {
        Ok(()) => println!("  Generated: {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
