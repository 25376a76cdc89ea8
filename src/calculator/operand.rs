//! Operand values accepted by the calculator.
//!
//! Callers can hand the calculator anything: numbers, but also text, nulls,
//! lists or maps coming out of deserialized data. [`Operand`] captures all of
//! those so the validation step can reject the non-numeric ones with a single
//! well-defined error instead of pushing the problem onto every call site.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::CalculatorError;

/// A caller-supplied value that may or may not be a usable number.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Operand {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Sequence(Vec<Operand>),
    Mapping(BTreeMap<String, Operand>),
    Null,
}

impl Operand {
    /// Validate this operand and return it as an `f64`.
    ///
    /// Only `Int` and `Float` are accepted. Booleans are rejected even though
    /// they have an obvious numeric reading, so `true` never silently turns
    /// into `1.0`.
    pub fn as_number(&self) -> Result<f64, CalculatorError> {
        match *self {
            Self::Int(value) => Ok(value as f64),
            Self::Float(value) => Ok(value),
            _ => Err(CalculatorError::InvalidOperand),
        }
    }

    /// Whether [`Operand::as_number`] would succeed.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Short name of the variant, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Null => "null",
        }
    }
}

macro_rules! operand_from {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Operand {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

operand_from!(Int, i64, i8, i16, i32, i64, u8, u16, u32);
operand_from!(Float, f64, f32, f64);

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Operand>> From<Vec<T>> for Operand {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Operand>> From<BTreeMap<String, T>> for Operand {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Self::Mapping(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Operand {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                // u64 above i64::MAX and all non-integers land here
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            Value::String(s) => Self::Text(s),
            Value::Array(items) => items.into(),
            Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Operand::from(v)))
                    .collect(),
            ),
        }
    }
}
