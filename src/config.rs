//! Configuration file for the project tracker
//!
//! A small TOML document; every key is optional.
//!
//! ```toml
//! date_format = "%m/%d/%Y"
//! due_soon_days = 7
//! default_priority = "MEDIUM"
//! log_level = "info"
//! ```

use crate::calendar::{Calendar, Clock, DEFAULT_DATE_FORMAT, DateFormat, SystemClock};
use crate::error::{Result, TrackerError};
use crate::tracker::Priority;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Upper bound for `due_soon_days`, one hundred years
pub const MAX_DUE_SOON_DAYS: i64 = 36_500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// chrono pattern used to parse and render due dates
    pub date_format: String,
    /// Window, in days, of the "due soon" view
    pub due_soon_days: i64,
    /// Priority given to projects added without an explicit one
    pub default_priority: Priority,
    /// Log level used when RUST_LOG is not set (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            due_soon_days: 7,
            default_priority: Priority::default(),
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TrackerError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: TrackerConfig =
            toml::from_str(content).map_err(|e| TrackerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TrackerError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        DateFormat::new(&self.date_format)?;
        if !(0..=MAX_DUE_SOON_DAYS).contains(&self.due_soon_days) {
            return Err(TrackerError::Config(format!(
                "due_soon_days must be between 0 and {} (got {})",
                MAX_DUE_SOON_DAYS, self.due_soon_days
            )));
        }
        Ok(())
    }

    /// Calendar reading the system clock in the configured format
    pub fn calendar(&self) -> Result<Calendar> {
        self.calendar_with_clock(Arc::new(SystemClock))
    }

    pub fn calendar_with_clock(&self, clock: Arc<dyn Clock>) -> Result<Calendar> {
        Ok(Calendar::new(DateFormat::new(&self.date_format)?, clock))
    }
}
