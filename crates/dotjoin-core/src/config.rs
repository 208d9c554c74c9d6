//! Join configuration that downstream crates can serialize/deserialize.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// What to do when two right-hand records produce the same join key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateKeys {
    /// The later record replaces the earlier one.
    #[default]
    LastWriteWins,
    /// Building the lookup fails with the offending key.
    Reject,
}

impl FromStr for DuplicateKeys {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-write-wins" | "last" => Ok(DuplicateKeys::LastWriteWins),
            "reject" => Ok(DuplicateKeys::Reject),
            other => Err(Error::Config(format!(
                "unknown duplicate-key policy '{other}' (expected 'last-write-wins' or 'reject')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    /// Policy for repeated keys in the right-hand collection.
    pub duplicate_keys: DuplicateKeys,

    /// Emit a trace event per lookup build (needs the operators `tracing` feature).
    pub trace_joins: bool,
}

impl JoinConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `DOTJOIN_DUPLICATE_KEYS`: `last-write-wins` or `reject`
    /// - `DOTJOIN_TRACE_JOINS`: `1`/`true` to enable join trace events
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`JoinConfig::from_env`] with a caller-supplied variable source.
    /// Unparseable values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(s) = lookup("DOTJOIN_DUPLICATE_KEYS") {
            if let Ok(v) = s.parse::<DuplicateKeys>() {
                cfg.duplicate_keys = v;
            }
        }

        if let Some(s) = lookup("DOTJOIN_TRACE_JOINS") {
            if let Some(v) = parse_flag(&s) {
                cfg.trace_joins = v;
            }
        }

        cfg
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
