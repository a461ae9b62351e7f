//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=spans=debug,message=debug` - scoped filtering
//! - `RUST_LOG=highlighter::debounce=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/selection-highlighter/logs/highlighter.log`
//! with daily rotation, always at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::HighlightModel;
use crate::palette::ColorTag;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr (stdout carries replay output) and respects
/// RUST_LOG, defaulting to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "highlighter.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        tracing::debug!("Keeping the existing global subscriber: {}", e);
    }
}

/// Lightweight snapshot of the focused document's spans for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanSnapshot {
    pub active: bool,
    pub color: ColorTag,
    pub document: Option<u64>,
    /// Span count per palette color, in palette order
    pub per_color: Vec<usize>,
}

impl SpanSnapshot {
    pub fn from_model(model: &HighlightModel) -> Self {
        let spans = model.active_spans();
        Self {
            active: model.mode.is_active(),
            color: model.active_color,
            document: model.active_editor.map(|t| t.document.0),
            per_color: ColorTag::ALL
                .into_iter()
                .map(|color| spans.iter().filter(|s| s.color == color).count())
                .collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.per_color.iter().sum()
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SpanSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.active != other.active {
            changes.push(format!("mode: {} → {}", self.active, other.active));
        }
        if self.color != other.color {
            changes.push(format!("color: {} → {}", self.color, other.color));
        }
        if self.document != other.document {
            changes.push(format!(
                "document: {:?} → {:?}",
                self.document, other.document
            ));
        } else if self.per_color != other.per_color {
            changes.push(format!("spans: {} → {}", self.total(), other.total()));
            for ((color, before), after) in ColorTag::ALL
                .iter()
                .zip(&self.per_color)
                .zip(&other.per_color)
            {
                if before != after {
                    changes.push(format!("{}: {} → {}", color, before, after));
                }
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
