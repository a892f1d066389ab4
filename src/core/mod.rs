pub mod calculator;
pub mod operations;
pub mod shell;

pub use crate::domain::model::{Calculation, MenuChoice, Number, Operation};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
pub use calculator::evaluate;
