//! UI layer: terminal session, input source and rendering.

mod event_source;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
