use super::{OutputFormat, Settings};
use crate::config::toml_config::TomlConfig;
use crate::domain::model::Operation;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sci-calc")]
#[command(about = "Scientific calculator: square root, factorial, natural logarithm and power")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Enable verbose logging (default level is warn; per-operation records are logged at info and debug)"
    )]
    pub verbose: bool,

    /// Decimal places for results
    #[arg(long)]
    pub precision: Option<usize>,

    /// Output format for one-shot commands
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the welcome banner in interactive mode
    #[arg(long)]
    pub no_banner: bool,

    /// Run a single operation instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Square root of X
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// Factorial of N
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Natural logarithm of X
    Ln {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// BASE raised to EXPONENT
    Pow {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::Sqrt { .. } => Operation::SquareRoot,
            Command::Factorial { .. } => Operation::Factorial,
            Command::Ln { .. } => Operation::NaturalLogarithm,
            Command::Pow { .. } => Operation::Power,
        }
    }
}

impl CliConfig {
    /// Layers the config file (if any) and then these flags over the defaults.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                Settings::from_toml(&file_config)
            }
            None => Settings::default(),
        };

        if self.verbose {
            settings.logging.level = "debug".to_string();
        }
        if let Some(precision) = self.precision {
            settings.precision = Some(precision);
        }
        if self.no_banner {
            settings.show_banner = false;
        }
        settings.format = self.format;

        settings.validate()?;
        Ok(settings)
    }
}
