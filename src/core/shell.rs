use crate::core::evaluate;
use crate::domain::model::{MenuChoice, Number, Operation};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{parse_float, parse_integer};
use std::io::{BufRead, Write};

const SEPARATOR_WIDTH: usize = 50;

/// Counts reported when the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub calculations: usize,
    pub errors: usize,
}

/// Menu-driven loop over a line-oriented input and a text output.
pub struct InteractiveShell<R: BufRead, W: Write, C: ConfigProvider> {
    input: R,
    output: W,
    config: C,
}

impl<R: BufRead, W: Write, C: ConfigProvider> InteractiveShell<R, W, C> {
    pub fn new(input: R, output: W, config: C) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Runs until the exit choice or end of input.
    ///
    /// Domain errors and unparsable operands are printed and the loop continues;
    /// only I/O failures end the session early.
    pub fn run(&mut self) -> Result<SessionSummary> {
        tracing::info!("Starting interactive session");
        let mut summary = SessionSummary::default();

        if self.config.show_banner() {
            self.print_banner()?;
        }

        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                tracing::info!("Input closed, ending session");
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::parse(&line) {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Thank you for using Scientific Calculator!")?;
                    tracing::info!("Session terminated by user");
                    break;
                }
                Ok(MenuChoice::Calculate(operation)) => {
                    match self.perform(operation) {
                        Ok(Some(rendered)) => {
                            writeln!(self.output, "{}", rendered)?;
                            summary.calculations += 1;
                        }
                        // input closed mid-prompt
                        Ok(None) => {
                            writeln!(self.output)?;
                            break;
                        }
                        Err(e) if e.is_recoverable() => {
                            tracing::error!(operation = %operation, error = %e, "Operation failed");
                            writeln!(self.output, "{}", Self::error_line(operation, &e))?;
                            summary.errors += 1;
                        }
                        Err(e) => return Err(e),
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Invalid menu choice");
                    writeln!(self.output, "{}", Self::choice_error_line(&e))?;
                }
            }

            writeln!(self.output, "\n{}\n", "=".repeat(SEPARATOR_WIDTH))?;
        }

        self.output.flush()?;
        tracing::info!(
            calculations = summary.calculations,
            errors = summary.errors,
            "Session summary"
        );
        Ok(summary)
    }

    /// Prompts for operands and evaluates. `Ok(None)` means the input ended first.
    fn perform(&mut self, operation: Operation) -> Result<Option<String>> {
        let inputs: Vec<Number> = match operation {
            Operation::SquareRoot => {
                let Some(x) = self.prompt("Enter a number for square root: ")? else {
                    return Ok(None);
                };
                vec![parse_float(&x)?.into()]
            }
            Operation::Factorial => {
                let Some(n) = self.prompt("Enter a non-negative integer for factorial: ")? else {
                    return Ok(None);
                };
                vec![parse_integer(&n)?.into()]
            }
            Operation::NaturalLogarithm => {
                let Some(x) = self.prompt("Enter a positive number for natural logarithm: ")?
                else {
                    return Ok(None);
                };
                vec![parse_float(&x)?.into()]
            }
            Operation::Power => {
                let Some(base) = self.prompt("Enter the base number (x): ")? else {
                    return Ok(None);
                };
                let base = parse_float(&base)?;
                let Some(exponent) = self.prompt("Enter the exponent (b): ")? else {
                    return Ok(None);
                };
                vec![base.into(), parse_float(&exponent)?.into()]
            }
        };

        let calculation = evaluate(operation, &inputs)?;
        Ok(Some(calculation.render(self.config.precision())))
    }

    fn error_line(operation: Operation, error: &CalcError) -> String {
        match error {
            CalcError::InvalidInput { .. } => match operation {
                Operation::Factorial => "Invalid input! Please enter a valid integer.".to_string(),
                Operation::Power => "Invalid input! Please enter valid numbers.".to_string(),
                _ => "Invalid input! Please enter a valid number.".to_string(),
            },
            other => format!("Error: {}", other),
        }
    }

    fn choice_error_line(error: &CalcError) -> String {
        match error {
            CalcError::InvalidChoice { .. } => {
                "Invalid choice! Please select a number between 1-5.".to_string()
            }
            other => format!("Error: {}", other),
        }
    }

    fn print_banner(&mut self) -> Result<()> {
        let rule = "=".repeat(33);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "  SCIENTIFIC CALCULATOR")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "Welcome to the Scientific Calculator!")?;
        writeln!(
            self.output,
            "This calculator supports the following operations:"
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Choose an operation:")?;
        for (index, operation) in Operation::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, operation.menu_label())?;
        }
        writeln!(self.output, "{}. Exit", MenuChoice::EXIT_NUMBER)?;
        write!(self.output, "\nEnter your choice (1-5): ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line; bytes that are not UTF-8 become U+FFFD so the text fails to parse
    /// like any other bad entry.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
