use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            file: None,
        }
    }
}

impl LogSettings {
    pub fn filter_directive(&self) -> String {
        format!("sci_calc={}", self.level)
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `settings.level`.
///
/// Logs never go to stdout, which belongs to the menu.
pub fn init_logger(settings: &LogSettings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.filter_directive()));

    let registry = tracing_subscriber::registry().with(filter);
    let base = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match &settings.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = base.with_ansi(false).with_writer(Mutex::new(file));
            match settings.format {
                LogFormat::Compact => registry.with(layer.compact()).init(),
                LogFormat::Json => registry.with(layer.json()).init(),
            }
        }
        None => {
            let layer = base.with_writer(std::io::stderr);
            match settings.format {
                LogFormat::Compact => registry.with(layer.compact()).init(),
                LogFormat::Json => registry.with(layer.json()).init(),
            }
        }
    }

    Ok(())
}
