//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Chrome
// =============================================================================

/// Style for the brand title in the top bar.
pub fn brand_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the hamburger and profile controls.
pub fn control_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for a control whose overlay is currently active.
pub fn active_control_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::REVERSED)
}

pub fn sidebar_link_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn notice_style() -> Style {
    Style::default().fg(Color::Yellow)
}

// =============================================================================
// Cards
// =============================================================================

/// Style for a card title once the card has faded in.
pub fn card_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn card_text_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Style for the header image label.
pub fn card_image_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub fn card_action_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Everything on a card that has not faded in yet.
pub fn card_hidden_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Overlays
// =============================================================================

pub fn overlay_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}
