//! Selection highlighter replay tool

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use highlighter::cli::{CliArgs, OutputFormat};
use highlighter::config::HighlighterConfig;
use highlighter::replay::{replay, Script};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    highlighter::tracing::init();

    let mut config = match &args.config {
        Some(path) => HighlighterConfig::load_from(path),
        None => HighlighterConfig::load(),
    };
    if let Some(ms) = args.debounce_ms {
        config.debounce_ms = ms;
    }

    let content = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script = Script::from_yaml(&content).map_err(|e| anyhow!(e))?;
    let report = replay(&script, config).map_err(|e| anyhow!(e))?;

    let output = match args.format {
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
        OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
    };
    print!("{}", output);
    Ok(())
}
