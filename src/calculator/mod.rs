//! Calculator module for validated binary arithmetic.
//!
//! This module provides:
//! - [`Operand`], the tagged input type that validation runs on
//! - [`Operation`], the four supported operations
//! - [`Calculator`], which applies operations and remembers the last result
//! - [`SharedCalculator`], a lock-guarded handle for use across threads

mod engine;
mod error;
mod operand;
mod operation;
mod shared;

pub use engine::Calculator;
pub use error::{CalculatorError, INVALID_OPERAND_MESSAGE, NO_RESULT_MESSAGE, Spelling};
pub use operand::Operand;
pub use operation::Operation;
pub use shared::SharedCalculator;
