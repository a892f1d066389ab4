pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::{OutputFormat, Settings};
pub use crate::core::operations::{factorial, natural_logarithm, power, square_root};
pub use crate::core::shell::{InteractiveShell, SessionSummary};
pub use crate::core::{evaluate, Calculation, Number, Operation};
pub use utils::error::{CalcError, Result};
