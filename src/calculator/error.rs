//! Errors raised by calculator operations.

use serde::{Deserialize, Serialize};

/// Message shared by every operand validation failure.
pub const INVALID_OPERAND_MESSAGE: &str =
    "Calculator operations require numeric inputs (int or float)";

/// Message returned when the memory is read before any successful operation.
pub const NO_RESULT_MESSAGE: &str = "No result available";

/// Which spelling the divide-by-zero message uses.
///
/// `Legacy` keeps the historical "devide" text so existing callers that match
/// on the exact message keep working. `Corrected` spells it properly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    #[default]
    Legacy,
    Corrected,
}

impl Spelling {
    /// The divide-by-zero message for this spelling.
    pub fn division_by_zero_message(self) -> &'static str {
        match self {
            Self::Legacy => "Cannot devide by zero",
            Self::Corrected => "Cannot divide by zero",
        }
    }
}

/// Error type for calculator operations.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum CalculatorError {
    /// An operand was not a real, non-boolean number.
    #[error("{}", INVALID_OPERAND_MESSAGE)]
    InvalidOperand,

    /// `divide` was called with a zero divisor.
    #[error("{}", .spelling.division_by_zero_message())]
    DivisionByZero { spelling: Spelling },

    /// No operation has succeeded yet.
    #[error("{}", NO_RESULT_MESSAGE)]
    NoResult,

    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

impl CalculatorError {
    /// Whether this error rejects the *type* of an input rather than its value.
    ///
    /// Callers that distinguish "bad input type" from "arithmetic failure"
    /// branch on this; only [`CalculatorError::InvalidOperand`] qualifies.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::InvalidOperand)
    }
}
