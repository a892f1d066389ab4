use crate::core::operations::{factorial, natural_logarithm, power, square_root};
use crate::domain::model::{Calculation, Number, Operation};
use crate::utils::error::{CalcError, Result};

/// Runs `operation` on already-parsed operands and packages the outcome.
///
/// Integer operands are accepted where a real one is expected; a real operand
/// given to factorial is rejected as invalid input.
pub fn evaluate(operation: Operation, inputs: &[Number]) -> Result<Calculation> {
    let arity = match operation {
        Operation::Power => 2,
        _ => 1,
    };
    if inputs.len() != arity {
        return Err(CalcError::invalid_input(
            &format!("{} operand(s)", inputs.len()),
            &format!("{} operand(s) for {}", arity, operation),
        ));
    }

    let result: Number = match operation {
        Operation::SquareRoot => square_root(real(inputs[0]))?.into(),
        Operation::Factorial => factorial(integer(inputs[0])?)?.into(),
        Operation::NaturalLogarithm => natural_logarithm(real(inputs[0]))?.into(),
        Operation::Power => power(real(inputs[0]), real(inputs[1])).into(),
    };

    Ok(Calculation::new(operation, inputs.to_vec(), result))
}

fn real(number: Number) -> f64 {
    match number {
        Number::Float(x) => x,
        Number::Integer(n) => n as f64,
    }
}

fn integer(number: Number) -> Result<i64> {
    match number {
        Number::Integer(n) => Ok(n),
        Number::Float(x) => Err(CalcError::invalid_input(&x.to_string(), "integer")),
    }
}
