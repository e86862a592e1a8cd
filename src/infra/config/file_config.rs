use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, DashboardConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub dashboard: Option<FileDashboardConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(dashboard) = self.dashboard {
            dashboard.merge_into(&mut config.dashboard);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDashboardConfig {
    pub seed: Option<u64>,
    pub fade_in_delay_ms: Option<u64>,
}

impl FileDashboardConfig {
    fn merge_into(self, config: &mut DashboardConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        if let Some(delay_ms) = self.fade_in_delay_ms {
            config.fade_in_delay_ms = delay_ms;
        }
    }
}
