//! Domain layer: overlay state machines, class cards and shell events.

pub mod card_list;
pub mod class_card;
pub mod dashboard_view;
pub mod events;
pub mod overlay;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
