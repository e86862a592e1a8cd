use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const FALLBACK_LOG_FILE_NAME: &str = "classdash.log";

/// Installs the global subscriber writing to a log file.
///
/// The terminal belongs to the TUI, so nothing is written to stdout. The
/// returned guard flushes buffered lines on drop and must outlive the shell.
pub fn init(config: &LogConfig, default_file: &Path) -> Result<WorkerGuard, AppError> {
    let file = config
        .file
        .clone()
        .unwrap_or_else(|| default_file.to_path_buf());
    let (directory, file_name) = split_log_path(&file);

    std::fs::create_dir_all(&directory).map_err(|source| AppError::StorageDirCreate {
        path: directory.clone(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

fn split_log_path(file: &Path) -> (PathBuf, String) {
    let directory = file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_LOG_FILE_NAME.to_owned());

    (directory, file_name)
}
