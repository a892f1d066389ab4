#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogSettings;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use toml_config::{TomlConfig, MAX_PRECISION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective settings after layering defaults, the config file and command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub logging: LogSettings,
    pub precision: Option<usize>,
    pub show_banner: bool,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LogSettings::default(),
            precision: None,
            show_banner: true,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            logging: config.log_settings(),
            precision: config.precision(),
            show_banner: config.show_banner(),
            format: OutputFormat::Text,
        }
    }
}

impl ConfigProvider for Settings {
    fn precision(&self) -> Option<usize> {
        self.precision
    }

    fn show_banner(&self) -> bool {
        self.show_banner
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(precision) = self.precision {
            validate_range("precision", precision, 0, MAX_PRECISION)?;
        }
        Ok(())
    }
}
