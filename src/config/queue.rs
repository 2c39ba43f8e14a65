//! Queue configuration structures.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Environment variable holding [`QueueConfig::initial_capacity`].
pub const ENV_INITIAL_CAPACITY: &str = "RAQ_INITIAL_CAPACITY";
/// Environment variable holding [`QueueConfig::audit_capacity`].
pub const ENV_AUDIT_CAPACITY: &str = "RAQ_AUDIT_CAPACITY";

/// Queue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Tasks the backing heap can hold before reallocating.
    pub initial_capacity: usize,
    /// Number of recent audit events to keep; `None` disables auditing.
    pub audit_capacity: Option<usize>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            audit_capacity: None,
        }
    }
}

impl QueueConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a message if `audit_capacity` is `Some(0)`.
    pub fn validate(&self) -> Result<(), String> {
        if self.audit_capacity == Some(0) {
            return Err("audit_capacity must be greater than 0 when set".into());
        }
        Ok(())
    }

    /// Parse queue configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a message on malformed JSON or invalid values.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, reading a `.env`
    /// file first if one exists. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails if a `.env` file exists but cannot be read or parsed, if a
    /// variable is set but not a non-negative integer, or if the result does
    /// not validate.
    pub fn from_env() -> AppResult<Self> {
        accept_missing_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_INITIAL_CAPACITY) {
            cfg.initial_capacity = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_INITIAL_CAPACITY}={raw:?} is not a valid capacity"))?;
        }
        if let Some(raw) = lookup(ENV_AUDIT_CAPACITY) {
            let capacity = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_AUDIT_CAPACITY}={raw:?} is not a valid capacity"))?;
            cfg.audit_capacity = Some(capacity);
        }
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}

/// A missing `.env` file is normal; any other dotenv failure is reported.
fn accept_missing_dotenv(loaded: Result<(), dotenvy::Error>) -> AppResult<()> {
    match loaded {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(anyhow::Error::new(e).context("failed to load .env file")),
    }
}
