use crate::utils::error::{CalcError, Result};
use crate::utils::logger::{LogFormat, LogSettings, LOG_LEVELS};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Most decimal places an `f64` can meaningfully show.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub logging: Option<LoggingConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub precision: Option<usize>,
    pub show_banner: Option<bool>,
}

impl TomlConfig {
    /// Loads and parses a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CalcError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses config text after substituting `${VAR}` references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_settings(&self) -> LogSettings {
        let mut settings = LogSettings::default();
        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                settings.level = level.to_lowercase();
            }
            if let Some(format) = logging.format {
                settings.format = format;
            }
            settings.file = logging.file.as_ref().map(PathBuf::from);
        }
        settings
    }

    pub fn precision(&self) -> Option<usize> {
        self.display.as_ref().and_then(|d| d.precision)
    }

    pub fn show_banner(&self) -> bool {
        self.display
            .as_ref()
            .and_then(|d| d.show_banner)
            .unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validate_one_of("logging.level", &level.to_lowercase(), &LOG_LEVELS)?;
            }
            if let Some(file) = &logging.file {
                validate_non_empty_string("logging.file", file)?;
            }
        }

        if let Some(precision) = self.precision() {
            validate_range("display.precision", precision, 0, MAX_PRECISION)?;
        }

        Ok(())
    }
}
