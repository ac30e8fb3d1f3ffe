//! Configuration for the arithmetic engine.
//!
//! This module defines the structures used to parameterize an
//! [`Engine`](crate::engine::Engine). It provides:
//! 1. **Defaults:** Baseline register width and trace retention.
//! 2. **Structures:** The root [`Config`] and its [`TraceConfig`] section.
//! 3. **Loading:** JSON text or file input, followed by validation.
//!
//! Every field is optional in JSON; use `Config::default()` for the RV32 baseline.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{ArithError, Result};

/// Default configuration constants for the engine.
mod defaults {
    /// Register width in bits (RV32).
    pub const XLEN: usize = crate::common::constants::XLEN;

    /// Narrowest supported register width; one sign bit plus one value bit.
    pub const MIN_XLEN: usize = 2;

    /// Widest supported register width; encode and decode use 64-bit host integers.
    pub const MAX_XLEN: usize = 64;

    /// Whether unit step records are kept by default.
    pub const TRACE_ENABLED: bool = true;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rvbits_core::config::Config;
///
/// let json = r#"{
///     "xlen": 16,
///     "trace": { "enabled": true, "max_steps": 4 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.xlen, 16);
/// assert_eq!(config.trace.max_steps, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Register width in bits for integer operations.
    #[serde(default = "Config::default_xlen")]
    pub xlen: usize,

    /// Retention of multiply/divide/float step records.
    #[serde(default)]
    pub trace: TraceConfig,
}

impl Config {
    fn default_xlen() -> usize {
        defaults::XLEN
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::ConfigSyntax`] for malformed JSON or unknown
    /// fields and [`ArithError::Config`] if validation fails.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::ConfigIo`] if the file cannot be read, otherwise
    /// as [`Config::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that the configuration describes a usable engine.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::Config`] if `xlen` is outside `2..=64` or the
    /// trace cap is zero.
    pub fn validate(&self) -> Result<()> {
        if !(defaults::MIN_XLEN..=defaults::MAX_XLEN).contains(&self.xlen) {
            return Err(ArithError::Config {
                reason: format!(
                    "xlen {} outside supported range {}..={}",
                    self.xlen,
                    defaults::MIN_XLEN,
                    defaults::MAX_XLEN
                ),
            });
        }
        if self.trace.max_steps == Some(0) {
            return Err(ArithError::Config {
                reason: "trace.max_steps must be positive; disable tracing instead".to_owned(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            xlen: defaults::XLEN,
            trace: TraceConfig::default(),
        }
    }
}

/// Step-record retention.
///
/// The units always record their steps; this controls what an
/// [`Engine`](crate::engine::Engine) hands back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceConfig {
    /// Keep step records at all.
    #[serde(default = "TraceConfig::default_enabled")]
    pub enabled: bool,

    /// Keep at most this many records per operation (earliest first).
    #[serde(default)]
    pub max_steps: Option<usize>,
}

impl TraceConfig {
    const fn default_enabled() -> bool {
        defaults::TRACE_ENABLED
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::TRACE_ENABLED,
            max_steps: None,
        }
    }
}
