use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Log destination; `None` uses the storage layout's log file.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Seed for the header-image picker; random when absent.
    pub seed: Option<u64>,
    pub fade_in_delay_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fade_in_delay_ms: 10,
        }
    }
}

impl DashboardConfig {
    pub fn fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.fade_in_delay_ms)
    }
}
