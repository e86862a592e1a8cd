use std::{
    io::{self, Stdout},
    panic,
    sync::Once,
};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

static PANIC_HOOK: Once = Once::new();

/// Raw-mode alternate screen owned by the dashboard shell. The terminal is
/// restored on drop and on panic.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        install_restore_on_panic();
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        tracing::debug!("terminal session entered");

        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            tracing::error!(%error, "failed to disable raw mode");
        }
        if let Err(error) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            tracing::error!(%error, "failed to leave alternate screen");
        }
        let _ = self.terminal.show_cursor();
    }
}

fn install_restore_on_panic() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            tracing::error!(%info, "dashboard shell panicked");
            previous(info);
        }));
    });
}
