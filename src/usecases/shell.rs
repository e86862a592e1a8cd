use std::time::Instant;

use anyhow::Result;
use rand::Rng;

use crate::{
    domain::{
        dashboard_view::DashboardView,
        events::{AppEvent, KeyInput},
        shell_state::ShellState,
    },
    infra::contracts::{join_announcement, JoinAnnouncer},
    page::{NodeId, PageDocument},
};

use super::{
    contracts::ShellOrchestrator,
    controller::{DashboardController, SubmitOutcome},
};

/// Maps terminal input onto page interactions.
///
/// While the join modal is shown, the class-code field has focus and
/// receives typed characters.
pub struct DefaultShellOrchestrator<D, R, A> {
    state: ShellState,
    controller: DashboardController<D, R, A>,
}

impl<D, R, A> DefaultShellOrchestrator<D, R, A>
where
    D: PageDocument,
    R: Rng,
    A: JoinAnnouncer,
{
    pub fn new(controller: DashboardController<D, R, A>) -> Self {
        Self {
            state: ShellState::default(),
            controller,
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &DashboardController<D, R, A> {
        &self.controller
    }

    fn click(&mut self, target: NodeId) -> Result<()> {
        self.controller.dispatch_click(target)?;
        Ok(())
    }

    fn handle_page_key(&mut self, key: &KeyInput) -> Result<()> {
        if key.ctrl {
            return Ok(());
        }

        let elements = *self.controller.elements();
        match key.key.as_str() {
            "q" => self.state.stop(),
            "h" => self.click(elements.hamburger)?,
            "p" => self.click(elements.profile_icon)?,
            "j" => {
                self.state.clear_notice();
                self.click(elements.join_class_button)?
            }
            "m" => {
                let body = self.controller.document().body();
                self.click(body)?
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_form_key(&mut self, key: &KeyInput) -> Result<()> {
        let elements = *self.controller.elements();

        if key.ctrl {
            if key.key == "b" {
                self.click(elements.modal)?;
            }
            return Ok(());
        }

        match key.key.as_str() {
            "enter" => self.submit()?,
            "esc" => self.click(elements.close_modal)?,
            "tab" => self.click(elements.cancel_button)?,
            "backspace" => self.controller.erase_class_code_char()?,
            _ => {
                if let Some(ch) = key.printable_char() {
                    self.controller.type_class_code(ch)?;
                }
            }
        }

        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        let submission = self.controller.submit_join_form(Instant::now())?;

        match submission.outcome {
            SubmitOutcome::Joined { card_index } => {
                if let Some(card) = self.controller.cards().get(card_index) {
                    self.state.set_notice(join_announcement(card.code()));
                }
            }
            SubmitOutcome::Rejected { notice } => self.state.set_notice(notice),
        }

        Ok(())
    }
}

impl<D, R, A> ShellOrchestrator for DefaultShellOrchestrator<D, R, A>
where
    D: PageDocument,
    R: Rng,
    A: JoinAnnouncer,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn dashboard(&self) -> DashboardView<'_> {
        self.controller.view()
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {
                self.controller.run_deferred(Instant::now())?;
            }
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => {
                if self.controller.modal().is_active() {
                    self.handle_form_key(&key)?;
                } else {
                    self.handle_page_key(&key)?;
                }
            }
        }

        Ok(())
    }
}
