//! The four calculator operations.
//!
//! Each function validates its operand, then delegates to the standard `f64`/`i64`
//! primitives. Entry is logged at `info`, domain violations at `error` before the
//! error is returned. None of them hold state.

use crate::domain::model::Operation;
use crate::utils::error::{CalcError, Result};

/// Largest `n` whose factorial fits in an `i64`. Beyond this the product wraps.
pub const MAX_EXACT_FACTORIAL: i64 = 20;

/// Principal square root of `x`. Fails for `x < 0`.
pub fn square_root(x: f64) -> Result<f64> {
    tracing::info!(operation = "square_root", x, "Calculating square root");

    if x < 0.0 {
        tracing::error!(operation = "square_root", x, "Negative operand");
        return Err(CalcError::domain(
            Operation::SquareRoot,
            "Cannot calculate square root of negative number",
        ));
    }

    let result = x.sqrt();
    tracing::debug!(operation = "square_root", result, "Square root result");
    Ok(result)
}

/// `n!` by iterative multiplication. Fails for `n < 0`.
///
/// The product uses wrapping `i64` arithmetic, so results for `n > MAX_EXACT_FACTORIAL`
/// are the low 64 bits of the true value rather than an error.
pub fn factorial(n: i64) -> Result<i64> {
    tracing::info!(operation = "factorial", n, "Calculating factorial");

    if n < 0 {
        tracing::error!(operation = "factorial", n, "Negative operand");
        return Err(CalcError::domain(
            Operation::Factorial,
            "Cannot calculate factorial of negative number",
        ));
    }

    if n > MAX_EXACT_FACTORIAL {
        tracing::warn!(
            operation = "factorial",
            n,
            max_exact = MAX_EXACT_FACTORIAL,
            "Result exceeds i64 range and has wrapped"
        );
    }

    let result = (2..=n).fold(1i64, |acc, i| acc.wrapping_mul(i));
    tracing::debug!(operation = "factorial", result, "Factorial result");
    Ok(result)
}

/// `ln(x)`. Fails for `x <= 0`.
pub fn natural_logarithm(x: f64) -> Result<f64> {
    tracing::info!(operation = "natural_logarithm", x, "Calculating natural logarithm");

    if x <= 0.0 {
        tracing::error!(operation = "natural_logarithm", x, "Non-positive operand");
        return Err(CalcError::domain(
            Operation::NaturalLogarithm,
            "Cannot calculate natural logarithm of non-positive number",
        ));
    }

    let result = x.ln();
    tracing::debug!(operation = "natural_logarithm", result, "Natural logarithm result");
    Ok(result)
}

/// `base` raised to `exponent`. Never fails: out-of-domain inputs such as a negative
/// base with a fractional exponent produce `NaN`.
pub fn power(base: f64, exponent: f64) -> f64 {
    tracing::info!(operation = "power", base, exponent, "Calculating power");

    let result = base.powf(exponent);
    tracing::debug!(operation = "power", result, "Power result");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        level: Level,
        operation: Option<String>,
        numbers: Vec<(String, f64)>,
    }

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<Record>>>);

    impl Recorder {
        fn records(&self) -> Vec<Record> {
            self.0.lock().unwrap().clone()
        }
    }

    struct FieldVisitor<'a>(&'a mut Record);

    impl Visit for FieldVisitor<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "operation" {
                self.0.operation = Some(value.to_string());
            }
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.0.numbers.push((field.name().to_string(), value));
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.0.numbers.push((field.name().to_string(), value as f64));
        }

        fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
    }

    impl<S: Subscriber> Layer<S> for Recorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut record = Record {
                level: *event.metadata().level(),
                operation: None,
                numbers: Vec::new(),
            };
            event.record(&mut FieldVisitor(&mut record));
            self.0.lock().unwrap().push(record);
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Record>) {
        let recorder = Recorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, recorder.records())
    }

    const TOLERANCE: f64 = 0.001;

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < TOLERANCE,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_square_root_positive_numbers() {
        assert_close(4.0, square_root(16.0).unwrap());
        assert_close(5.0, square_root(25.0).unwrap());
        assert_close(3.0, square_root(9.0).unwrap());
        assert_close(1.0, square_root(1.0).unwrap());
        assert_close(0.0, square_root(0.0).unwrap());
    }

    #[test]
    fn test_square_root_decimal() {
        assert_close(1.414, square_root(2.0).unwrap());
        assert_close(2.236, square_root(5.0).unwrap());
    }

    #[test]
    fn test_square_root_negative_number() {
        for x in [-1.0, -25.0, f64::NEG_INFINITY] {
            let err = square_root(x).unwrap_err();
            assert!(matches!(
                err,
                CalcError::Domain {
                    operation: Operation::SquareRoot,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_square_root_nan_passes_through() {
        assert!(square_root(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_factorial_small_numbers() {
        let expected = [1, 1, 2, 6, 24, 120, 720, 5040, 40320];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(factorial(n as i64).unwrap(), *want);
        }
    }

    #[test]
    fn test_factorial_largest_exact() {
        assert_eq!(factorial(MAX_EXACT_FACTORIAL).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_wraps_past_i64() {
        let expected = 2_432_902_008_176_640_000i64.wrapping_mul(21);
        assert_eq!(factorial(21).unwrap(), expected);
        assert!(factorial(21).unwrap() < 0);
    }

    #[test]
    fn test_factorial_negative_number() {
        assert!(factorial(-1).is_err());
        assert!(factorial(-3).is_err());
        assert!(factorial(i64::MIN).is_err());
    }

    #[test]
    fn test_natural_logarithm_positive_numbers() {
        assert_close(0.0, natural_logarithm(1.0).unwrap());
        assert_close(1.0, natural_logarithm(std::f64::consts::E).unwrap());
        assert_close(
            2.0,
            natural_logarithm(std::f64::consts::E * std::f64::consts::E).unwrap(),
        );
        assert_close(0.693, natural_logarithm(2.0).unwrap());
        assert_close(1.609, natural_logarithm(5.0).unwrap());
        assert_close(2.303, natural_logarithm(10.0).unwrap());
    }

    #[test]
    fn test_natural_logarithm_non_positive() {
        assert!(natural_logarithm(0.0).is_err());
        assert!(natural_logarithm(-0.0).is_err());
        assert!(natural_logarithm(-1.0).is_err());
        assert!(natural_logarithm(-5.0).is_err());
    }

    #[test]
    fn test_power() {
        assert_close(8.0, power(2.0, 3.0));
        assert_close(25.0, power(5.0, 2.0));
        assert_close(1.0, power(10.0, 0.0));
        assert_close(10.0, power(10.0, 1.0));
        assert_close(-8.0, power(-2.0, 3.0));
        assert_close(4.0, power(-2.0, 2.0));
        assert_close(1.0, power(-5.0, 0.0));
        assert_close(0.5, power(2.0, -1.0));
        assert_close(0.25, power(2.0, -2.0));
        assert_close(0.1, power(10.0, -1.0));
        assert_close(4.0, power(16.0, 0.5));
        assert_close(2.0, power(8.0, 1.0 / 3.0));
    }

    #[test]
    fn test_power_edge_cases() {
        assert_eq!(power(0.0, 0.0), 1.0);
        assert_eq!(power(0.0, 1.0), 0.0);
        assert_eq!(power(1.0, 1000.0), 1.0);
        assert!(power(-8.0, 1.0 / 3.0).is_nan());
        assert_eq!(power(0.0, -1.0), f64::INFINITY);
    }

    #[test]
    fn test_domain_violation_logs_info_then_error() {
        let (result, records) = capture(|| square_root(-1.0));
        assert!(result.is_err());

        let levels: Vec<Level> = records.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![Level::INFO, Level::ERROR]);
        for record in &records {
            assert_eq!(record.operation.as_deref(), Some("square_root"));
            assert!(record.numbers.contains(&("x".to_string(), -1.0)));
        }
    }

    #[test]
    fn test_successful_call_logs_inputs_without_error() {
        let (result, records) = capture(|| power(2.0, 3.0));
        assert_eq!(result, 8.0);

        assert_eq!(records[0].level, Level::INFO);
        assert_eq!(records[0].operation.as_deref(), Some("power"));
        assert!(records[0].numbers.contains(&("base".to_string(), 2.0)));
        assert!(records[0].numbers.contains(&("exponent".to_string(), 3.0)));
        assert!(records.iter().all(|r| r.level != Level::ERROR));
    }

    #[test]
    fn test_factorial_past_exact_range_warns() {
        let (_, records) = capture(|| factorial(MAX_EXACT_FACTORIAL + 1));
        assert!(records
            .iter()
            .any(|r| r.level == Level::WARN && r.operation.as_deref() == Some("factorial")));
        assert!(records.iter().all(|r| r.level != Level::ERROR));
    }
}
