//! Page layer: the visual tree the dashboard controller operates on.

pub mod dashboard;
pub mod document;
pub mod error;
pub mod event;
pub mod memory;
pub mod selector;

pub use document::{NodeId, PageDocument};
pub use error::PageError;
pub use memory::MemoryDocument;
pub use selector::Selector;

/// Returns the page module name for smoke checks.
pub fn module_name() -> &'static str {
    "page"
}
