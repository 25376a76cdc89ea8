//! The four arithmetic operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CalculatorError;

/// A binary arithmetic operation supported by the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    #[serde(alias = "devide")]
    Divide,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Lowercase name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation to already validated operands.
    ///
    /// Returns `None` only when dividing by zero (either signed zero).
    /// Infinities and NaN follow IEEE 754 rules.
    pub fn checked_apply(self, x: f64, y: f64) -> Option<f64> {
        match self {
            Self::Add => Some(x + y),
            Self::Subtract => Some(x - y),
            Self::Multiply => Some(x * y),
            Self::Divide if y == 0.0 => None,
            Self::Divide => Some(x / y),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" | "devide" => Ok(Self::Divide),
            other => Err(CalculatorError::UnknownOperation(other.to_string())),
        }
    }
}
