//! The calculator itself: validated arithmetic plus a last-result memory.

use tracing::{debug, warn};

use super::error::{CalculatorError, Spelling};
use super::operand::Operand;
use super::operation::Operation;
use crate::config::Config;

/// A four-function calculator that remembers its last successful result.
///
/// Every operation validates both operands before doing any arithmetic.
/// The memory is written only after an operation succeeds, so a rejected
/// operand or a zero divisor never disturbs the previously stored value.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    last_result: Option<f64>,
    spelling: Spelling,
}

impl Calculator {
    /// Create a calculator with an empty memory and the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with an empty memory using `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            last_result: None,
            spelling: config.spelling,
        }
    }

    /// Add two numbers.
    pub fn add(
        &mut self,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> Result<f64, CalculatorError> {
        self.apply(Operation::Add, x, y)
    }

    /// Subtract `y` from `x`.
    pub fn subtract(
        &mut self,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> Result<f64, CalculatorError> {
        self.apply(Operation::Subtract, x, y)
    }

    /// Multiply two numbers.
    pub fn multiply(
        &mut self,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> Result<f64, CalculatorError> {
        self.apply(Operation::Multiply, x, y)
    }

    /// Divide `x` by `y`. Fails with [`CalculatorError::DivisionByZero`] when `y` is zero.
    pub fn divide(
        &mut self,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> Result<f64, CalculatorError> {
        self.apply(Operation::Divide, x, y)
    }

    /// Run `op` on `x` and `y`, storing the result on success.
    pub fn apply(
        &mut self,
        op: Operation,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> Result<f64, CalculatorError> {
        let (x, y) = (x.into(), y.into());

        let (a, b) = match (x.as_number(), y.as_number()) {
            (Ok(a), Ok(b)) => (a, b),
            _ => {
                warn!(
                    op = op.name(),
                    x = x.kind(),
                    y = y.kind(),
                    "rejected non-numeric operand"
                );
                return Err(CalculatorError::InvalidOperand);
            }
        };

        let Some(result) = op.checked_apply(a, b) else {
            warn!(op = op.name(), x = a, "division by zero");
            return Err(CalculatorError::DivisionByZero {
                spelling: self.spelling,
            });
        };

        debug!(op = op.name(), x = a, y = b, result, "performed operation");
        self.last_result = Some(result);
        Ok(result)
    }

    /// The most recent successful result.
    ///
    /// Fails with [`CalculatorError::NoResult`] until an operation succeeds.
    pub fn get_last_result(&self) -> Result<f64, CalculatorError> {
        self.last_result.ok_or_else(|| {
            debug!("last result requested before any operation succeeded");
            CalculatorError::NoResult
        })
    }

    /// Peek at the memory without failing.
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }
}
