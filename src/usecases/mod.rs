//! Use case layer: the interaction controller and shell orchestration.

pub mod bootstrap;
pub mod card_builder;
pub mod context;
pub mod contracts;
pub mod controller;
pub mod deferred;
pub mod shell;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
