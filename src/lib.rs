//! A four-function calculator with operand validation and a last-result memory.
//!
//! ```
//! use memcalc::{Calculator, CalculatorError};
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.add(2, 3), Ok(5.0));
//! assert_eq!(calc.divide(1, 0).unwrap_err().to_string(), "Cannot devide by zero");
//! assert_eq!(calc.get_last_result(), Ok(5.0));
//! assert_eq!(calc.multiply(true, 5), Err(CalculatorError::InvalidOperand));
//! ```

pub mod calculator;
pub mod config;

pub use calculator::{Calculator, CalculatorError, Operand, Operation, SharedCalculator, Spelling};
pub use config::Config;
