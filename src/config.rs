//! Calculator configuration.
//!
//! Configuration is plain TOML text; loading it from disk is left to the caller.
//!
//! ```toml
//! spelling = "corrected"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::calculator::Spelling;

/// Settings applied when constructing a [`Calculator`](crate::Calculator).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Spelling of the divide-by-zero error message.
    pub spelling: Spelling,
}

impl Config {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse calculator config")
    }

    /// Render this config as TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize calculator config")
    }
}
