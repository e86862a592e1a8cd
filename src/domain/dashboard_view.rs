//! Read-only snapshot of the dashboard handed to the renderer.

use super::class_card::ClassCard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub card: &'a ClassCard,
    /// False until the deferred fade-in has made the card opaque.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardView<'a> {
    pub sidebar_expanded: bool,
    pub dropdown_shown: bool,
    pub modal_shown: bool,
    pub class_code: &'a str,
    pub sidebar_links: Vec<&'a str>,
    pub dropdown_items: Vec<&'a str>,
    pub cards: Vec<CardView<'a>>,
}
