//! core::value
//!
//! Typed configuration values.
//!
//! # Types
//!
//! - [`ValueKind`] - Which typed accessor to use
//! - [`ConfigValue`] - A value of one of those kinds
//!
//! # Examples
//!
//! ```
//! use gitbind::core::value::{ConfigValue, ValueKind};
//!
//! let v = ConfigValue::parse(ValueKind::Bool, "yes").unwrap();
//! assert_eq!(v, ConfigValue::Bool(true));
//! assert_eq!(v.to_string(), "true");
//!
//! assert!(ConfigValue::parse(ValueKind::Int, "12x").is_err());
//! ```

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a value of a given kind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("invalid boolean '{0}', expected true/false, yes/no, on/off or 1/0")]
    InvalidBool(String),

    #[error("invalid integer '{0}', expected a signed 64-bit decimal")]
    InvalidInt(String),
}

/// The typed accessor a value goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Bool,
    Int,
    #[default]
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::String => write!(f, "string"),
        }
    }
}

/// A configuration value with its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl ConfigValue {
    /// Parse `text` as a value of `kind`.
    ///
    /// Strings are taken verbatim, including surrounding whitespace.
    pub fn parse(kind: ValueKind, text: &str) -> Result<ConfigValue, ValueError> {
        match kind {
            ValueKind::Bool => parse_bool(text)
                .map(ConfigValue::Bool)
                .ok_or_else(|| ValueError::InvalidBool(text.to_string())),
            ValueKind::Int => text
                .trim()
                .parse::<i64>()
                .map(ConfigValue::Int)
                .map_err(|_| ValueError::InvalidInt(text.to_string())),
            ValueKind::String => Ok(ConfigValue::String(text.to_string())),
        }
    }

    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfigValue::Bool(_) => ValueKind::Bool,
            ConfigValue::Int(_) => ValueKind::Int,
            ConfigValue::String(_) => ValueKind::String,
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::String(s) => write!(f, "{}", s),
        }
    }
}
