use anyhow::Result;

use crate::domain::{dashboard_view::DashboardView, events::AppEvent, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn dashboard(&self) -> DashboardView<'_>;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
