use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    SquareRoot,
    Factorial,
    NaturalLogarithm,
    Power,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::SquareRoot,
        Operation::Factorial,
        Operation::NaturalLogarithm,
        Operation::Power,
    ];

    /// Name used in log events and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::SquareRoot => "square_root",
            Operation::Factorial => "factorial",
            Operation::NaturalLogarithm => "natural_logarithm",
            Operation::Power => "power",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            Operation::SquareRoot => "Square Root (√x)",
            Operation::Factorial => "Factorial (!x)",
            Operation::NaturalLogarithm => "Natural Logarithm (ln(x))",
            Operation::Power => "Power (x^b)",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate(Operation),
    Exit,
}

impl MenuChoice {
    pub const EXIT_NUMBER: u32 = 5;

    /// Maps a menu entry (`1..=5`) to a choice.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::Calculate(Operation::SquareRoot)),
            2 => Some(MenuChoice::Calculate(Operation::Factorial)),
            3 => Some(MenuChoice::Calculate(Operation::NaturalLogarithm)),
            4 => Some(MenuChoice::Calculate(Operation::Power)),
            Self::EXIT_NUMBER => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| CalcError::InvalidChoice {
                input: trimmed.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Floats keep a fractional part (`16.0`, not `16`) unless `precision` is given.
    pub fn render(&self, precision: Option<usize>) -> String {
        match (self, precision) {
            (Number::Integer(n), _) => n.to_string(),
            (Number::Float(x), Some(p)) => format!("{:.*}", p, x),
            (Number::Float(x), None) => format!("{:?}", x),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

/// A completed operation: what was asked and what came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: Operation,
    pub inputs: Vec<Number>,
    pub result: Number,
}

impl Calculation {
    pub fn new(operation: Operation, inputs: Vec<Number>, result: impl Into<Number>) -> Self {
        Self {
            operation,
            inputs,
            result: result.into(),
        }
    }

    /// Human-readable form, e.g. `√16.0 = 4.0` or `2.0^3.0 = 8.0`.
    ///
    /// Operands are echoed as entered; `precision` only applies to the result.
    pub fn render(&self, precision: Option<usize>) -> String {
        let input = |i: usize| {
            self.inputs
                .get(i)
                .map(|n| n.render(None))
                .unwrap_or_default()
        };
        let result = self.result.render(precision);

        match self.operation {
            Operation::SquareRoot => format!("√{} = {}", input(0), result),
            Operation::Factorial => format!("{}! = {}", input(0), result),
            Operation::NaturalLogarithm => format!("ln({}) = {}", input(0), result),
            Operation::Power => format!("{}^{} = {}", input(0), input(1), result),
        }
    }
}
