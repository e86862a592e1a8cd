use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        seed = ?context.config.dashboard.seed,
        "starting dashboard shell"
    );

    let mut terminal = TerminalSession::new()?;

    while orchestrator.state().is_running() {
        terminal.draw(|frame| {
            view::render(frame, orchestrator.state(), &orchestrator.dashboard())
        })?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    tracing::info!("dashboard shell stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{
        domain::events::{AppEvent, KeyInput},
        infra::stubs::RecordingAnnouncer,
        page::{dashboard::build_dashboard_page, MemoryDocument},
        ui::event_source::MockEventSource,
        usecases::{controller::DashboardController, shell::DefaultShellOrchestrator},
    };

    fn orchestrator() -> DefaultShellOrchestrator<MemoryDocument, ChaCha8Rng, RecordingAnnouncer> {
        let mut document = MemoryDocument::new();
        build_dashboard_page(&mut document).expect("page should build");
        let controller = DashboardController::bind(
            document,
            ChaCha8Rng::seed_from_u64(3),
            RecordingAnnouncer::default(),
            Duration::ZERO,
        )
        .expect("page should bind");
        DefaultShellOrchestrator::new(controller)
    }

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let event = source.next_event().expect("must read mock event");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn orchestrator_consumes_scripted_session() {
        let mut source = MockEventSource::from(vec![
            AppEvent::InputKey(KeyInput::new("j", false)),
            AppEvent::InputKey(KeyInput::new("X", false)),
            AppEvent::InputKey(KeyInput::new("enter", false)),
            AppEvent::Tick,
            AppEvent::QuitRequested,
        ]);
        let mut orchestrator = orchestrator();

        while let Some(event) = source.next_event().expect("must read mock event") {
            orchestrator
                .handle_event(event)
                .expect("must handle scripted event");
        }

        assert!(!orchestrator.state().is_running());
        let view = orchestrator.dashboard();
        assert_eq!(view.cards.len(), 1);
        assert!(view.cards[0].visible);
    }
}
