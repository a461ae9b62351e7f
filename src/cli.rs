//! Command-line argument parsing for the replay tool

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output encoding for the replay report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Replay a scripted highlighting session and print the resulting spans
#[derive(Parser, Debug)]
#[command(
    name = "highlighter",
    version,
    about = "Replay a selection highlighting session"
)]
pub struct CliArgs {
    /// YAML script describing documents and steps
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Output format for the final state
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the debounce quiet interval (milliseconds)
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}
