use tracing_appender::non_blocking::WorkerGuard;

use crate::infra::config::AppConfig;

pub struct AppContext {
    pub config: AppConfig,
    /// Keeps the non-blocking log writer flushing until the app exits.
    _log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            _log_guard: None,
        }
    }

    pub fn with_log_guard(mut self, guard: WorkerGuard) -> Self {
        self._log_guard = Some(guard);
        self
    }
}
