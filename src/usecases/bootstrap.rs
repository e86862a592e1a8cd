use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    infra::{
        self, announcer::LogJoinAnnouncer, config::FileConfigAdapter, contracts::ConfigAdapter,
        error::AppError, storage_layout::StorageLayout,
    },
    page::{dashboard::build_dashboard_page, MemoryDocument},
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        controller::DashboardController,
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>, seed: Option<u64>) -> anyhow::Result<AppContext> {
    let context = build_context(&FileConfigAdapter::new(config_path), seed)?;

    let log_file = match context.config.logging.file.clone() {
        Some(file) => file,
        None => {
            let layout = StorageLayout::resolve()?;
            layout.ensure_dirs()?;
            layout.log_file()
        }
    };
    let guard = infra::logging::init(&context.config.logging, &log_file)?;

    Ok(context.with_log_guard(guard))
}

fn build_context(
    config_adapter: &dyn ConfigAdapter,
    seed: Option<u64>,
) -> anyhow::Result<AppContext> {
    let mut config = config_adapter.load()?;

    if seed.is_some() {
        config.dashboard.seed = seed;
    }

    Ok(AppContext::new(config))
}

pub fn compose_shell(context: &AppContext) -> Result<ShellComposition, AppError> {
    let seed = context.config.dashboard.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "header image source seeded");

    let mut document = MemoryDocument::new();
    build_dashboard_page(&mut document)?;

    let controller = DashboardController::bind(
        document,
        ChaCha8Rng::seed_from_u64(seed),
        LogJoinAnnouncer,
        context.config.dashboard.fade_in_delay(),
    )?;

    Ok(ShellComposition {
        event_source: Box::new(CrosstermEventSource),
        orchestrator: Box::new(DefaultShellOrchestrator::new(controller)),
    })
}
