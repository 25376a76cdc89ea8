//! A calculator handle that can be shared between threads.

use std::sync::{Arc, Mutex, MutexGuard};

use super::engine::Calculator;
use super::error::CalculatorError;
use super::operand::Operand;
use super::operation::Operation;
use crate::config::Config;

/// Cloneable, thread-safe handle to a single [`Calculator`].
///
/// Each operation holds the lock for its whole validate, compute and store
/// sequence, so concurrent callers never observe a half-applied update.
#[derive(Clone, Debug, Default)]
pub struct SharedCalculator {
    inner: Arc<Mutex<Calculator>>,
}

impl SharedCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &Config) -> Self {
        Self::from(Calculator::with_config(config))
    }

    pub fn add(
        &self,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> Result<f64, CalculatorError> {
        self.apply(Operation::Add, x, y)
    }

    pub fn subtract(
        &self,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> Result<f64, CalculatorError> {
        self.apply(Operation::Subtract, x, y)
    }

    pub fn multiply(
        &self,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> Result<f64, CalculatorError> {
        self.apply(Operation::Multiply, x, y)
    }

    pub fn divide(
        &self,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> Result<f64, CalculatorError> {
        self.apply(Operation::Divide, x, y)
    }

    pub fn apply(
        &self,
        op: Operation,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> Result<f64, CalculatorError> {
        self.lock().apply(op, x, y)
    }

    pub fn get_last_result(&self) -> Result<f64, CalculatorError> {
        self.lock().get_last_result()
    }

    pub fn last_result(&self) -> Option<f64> {
        self.lock().last_result()
    }

    // The guarded state is a plain Option<f64> that is only written after a
    // successful computation, so a poisoned lock still holds a valid value.
    fn lock(&self) -> MutexGuard<'_, Calculator> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<Calculator> for SharedCalculator {
    fn from(calculator: Calculator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(calculator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_memory() {
        let calc = SharedCalculator::new();
        let other = calc.clone();

        assert_eq!(calc.get_last_result(), Err(CalculatorError::NoResult));
        other.multiply(4, 5).unwrap();
        assert_eq!(calc.get_last_result(), Ok(20.0));
    }

    #[test]
    fn test_failure_keeps_memory() {
        let calc = SharedCalculator::new();
        calc.divide(10, 2).unwrap();
        assert!(calc.divide(1, 0).is_err());
        assert!(calc.subtract(true, 1).is_err());
        assert_eq!(calc.last_result(), Some(5.0));
    }

    #[test]
    fn test_concurrent_operations() {
        let calc = SharedCalculator::new();

        let handles: Vec<_> = (1..=8)
            .map(|n| {
                let calc = calc.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        calc.add(n, n).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Whichever thread wrote last, the memory holds one complete result.
        let last = calc.get_last_result().unwrap();
        assert!((1..=8).any(|n| last == f64::from(2 * n)));
    }

    #[test]
    fn test_with_config() {
        let config = Config::from_toml_str(r#"spelling = "corrected""#).unwrap();
        let calc = SharedCalculator::with_config(&config);
        let err = calc.divide(1, 0).unwrap_err();
        assert_eq!(err.to_string(), "Cannot divide by zero");
    }
}
