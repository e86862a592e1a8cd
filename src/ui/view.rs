use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    class_card::{INSTRUCTOR_PLACEHOLDER, VIEW_CLASS_LABEL},
    dashboard_view::{CardView, DashboardView},
    shell_state::ShellState,
};

use super::styles;

const BRAND: &str = "EduBridge";
const HAMBURGER_GLYPH: &str = "☰";
const PROFILE_LABEL: &str = "Profile";
const EXPANDED_SIDEBAR_WIDTH: u16 = 22;
const COLLAPSED_SIDEBAR_WIDTH: u16 = 5;
const CARD_MIN_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 9;
const DROPDOWN_WIDTH: u16 = 18;
const MODAL_WIDTH: u16 = 48;
const MODAL_HEIGHT: u16 = 9;

pub fn render(frame: &mut Frame<'_>, state: &ShellState, view: &DashboardView<'_>) {
    let [header_area, body_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let sidebar_width = if view.sidebar_expanded {
        EXPANDED_SIDEBAR_WIDTH
    } else {
        COLLAPSED_SIDEBAR_WIDTH
    };
    let [sidebar_area, main_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
        .areas(body_area);

    render_header(frame, header_area, view);
    render_sidebar(frame, sidebar_area, view);
    render_main(frame, main_area, view);
    frame.render_widget(Paragraph::new(status_line(state, view)), status_area);

    if view.dropdown_shown {
        render_dropdown(frame, header_area, body_area, view);
    }

    if view.modal_shown {
        render_modal(frame, frame.area(), view);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, view: &DashboardView<'_>) {
    let inner_width = area.width.saturating_sub(2) as usize;
    frame.render_widget(
        Paragraph::new(header_line(view, inner_width)).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn header_line(view: &DashboardView<'_>, width: usize) -> Line<'static> {
    let left = format!("{HAMBURGER_GLYPH}  {BRAND}");
    let right = format!("[{PROFILE_LABEL}]");
    let padding = width.saturating_sub(left.width() + right.width());

    let profile_style = if view.dropdown_shown {
        styles::active_control_style()
    } else {
        styles::control_style()
    };
    let hamburger_style = if view.sidebar_expanded {
        styles::active_control_style()
    } else {
        styles::control_style()
    };

    Line::from(vec![
        Span::styled(HAMBURGER_GLYPH.to_owned(), hamburger_style),
        Span::raw("  "),
        Span::styled(BRAND.to_owned(), styles::brand_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, profile_style),
    ])
}

fn render_sidebar(frame: &mut Frame<'_>, area: Rect, view: &DashboardView<'_>) {
    let lines: Vec<Line<'static>> = sidebar_items(&view.sidebar_links, view.sidebar_expanded)
        .into_iter()
        .map(|item| Line::from(Span::styled(item, styles::sidebar_link_style())))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::RIGHT)),
        area,
    );
}

/// Full labels when expanded, initials otherwise.
fn sidebar_items(links: &[&str], expanded: bool) -> Vec<String> {
    links
        .iter()
        .map(|link| {
            if expanded {
                format!(" {link}")
            } else {
                link.chars()
                    .next()
                    .map(|initial| format!(" {initial}"))
                    .unwrap_or_default()
            }
        })
        .collect()
}

fn render_main(frame: &mut Frame<'_>, area: Rect, view: &DashboardView<'_>) {
    let [toolbar_area, cards_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled("[ + Join Class ]".to_owned(), styles::control_style()),
        ])),
        toolbar_area,
    );

    if view.cards.is_empty() {
        frame.render_widget(Paragraph::new(empty_cards_line()), cards_area);
        return;
    }

    for (card, slot) in view.cards.iter().zip(card_slots(cards_area, view.cards.len())) {
        render_card(frame, slot, card);
    }
}

fn empty_cards_line() -> Line<'static> {
    Line::from(Span::styled(
        " You are not enrolled in any classes yet.",
        styles::hint_style(),
    ))
}

fn render_card(frame: &mut Frame<'_>, area: Rect, card: &CardView<'_>) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let border_style = if card.visible {
        styles::card_text_style()
    } else {
        styles::card_hidden_style()
    };
    let title = truncate_to_width(&card.card.title(), inner_width);

    frame.render_widget(
        Paragraph::new(card_lines(card, inner_width)).block(
            Block::default()
                .title(Span::styled(title, title_style(card.visible)))
                .borders(Borders::ALL)
                .border_style(border_style),
        ),
        area,
    );
}

fn title_style(visible: bool) -> Style {
    if visible {
        styles::card_title_style()
    } else {
        styles::card_hidden_style()
    }
}

fn card_lines(card: &CardView<'_>, width: usize) -> Vec<Line<'static>> {
    let pick = |style: Style| {
        if card.visible {
            style
        } else {
            styles::card_hidden_style()
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(
                &format!("▒ {}", header_image_label(card.card.header_image())),
                width,
            ),
            pick(styles::card_image_style()),
        )),
        Line::from(Span::styled(
            truncate_to_width(INSTRUCTOR_PLACEHOLDER, width),
            pick(styles::card_text_style()),
        )),
    ];
    lines.extend(card.card.info_lines().iter().map(|info| {
        Line::from(Span::styled(
            truncate_to_width(info, width),
            pick(styles::card_text_style()),
        ))
    }));
    lines.push(Line::from(Span::styled(
        format!("[ {VIEW_CLASS_LABEL} ]"),
        pick(styles::card_action_style()),
    )));

    lines
}

/// File stem of a header image URL, e.g. `img_code`.
fn header_image_label(url: &str) -> &str {
    let file = url.rsplit('/').next().unwrap_or(url);
    file.split('.').next().unwrap_or(file)
}

/// Lays cards out left to right, top to bottom. Cards that do not fit
/// vertically are not drawn.
fn card_slots(area: Rect, count: usize) -> Vec<Rect> {
    let columns = (area.width / CARD_MIN_WIDTH).max(1);
    let card_width = area.width / columns;
    let rows = area.height / CARD_HEIGHT;

    (0..count)
        .map_while(|index| {
            let index = u16::try_from(index).ok()?;
            let row = index / columns;
            let column = index % columns;
            (row < rows).then(|| Rect {
                x: area.x + column * card_width,
                y: area.y + row * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            })
        })
        .collect()
}

fn render_dropdown(frame: &mut Frame<'_>, header: Rect, body: Rect, view: &DashboardView<'_>) {
    let height = u16::try_from(view.dropdown_items.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(body.height);
    let width = DROPDOWN_WIDTH.min(body.width);
    let area = Rect {
        x: header.right().saturating_sub(width),
        y: body.y,
        width,
        height,
    };

    let lines: Vec<Line<'static>> = view
        .dropdown_items
        .iter()
        .map(|item| Line::from(format!(" {item}")))
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::overlay_border_style()),
        ),
        area,
    );
}

fn render_modal(frame: &mut Frame<'_>, screen: Rect, view: &DashboardView<'_>) {
    let area = centered_rect(screen, MODAL_WIDTH, MODAL_HEIGHT);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(modal_lines(view.class_code)).block(
            Block::default()
                .title(" Join Class ")
                .title_top(Line::from(" × ").right_aligned())
                .borders(Borders::ALL)
                .border_style(styles::overlay_border_style()),
        ),
        area,
    );
}

fn modal_lines(class_code: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(" Class code"),
        Line::from(vec![
            Span::styled(" > ", styles::input_prompt_style()),
            Span::styled(format!("{class_code}_"), styles::input_text_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Enter: join | Tab: cancel | Esc: close",
            styles::hint_style(),
        )),
        Line::from(Span::styled(
            " Ctrl+B: click backdrop",
            styles::hint_style(),
        )),
    ]
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn status_line(state: &ShellState, view: &DashboardView<'_>) -> Line<'static> {
    let (text, style) = match state.notice() {
        Some(notice) => (notice.to_owned(), styles::notice_style()),
        None => (status_hint(view).to_owned(), styles::hint_style()),
    };
    Line::from(Span::styled(text, style))
}

fn status_hint(view: &DashboardView<'_>) -> &'static str {
    if view.modal_shown {
        "type a class code | Enter: join | Tab: cancel | Esc: close"
    } else {
        "h: sidebar | p: profile | j: join class | m: click page | q: quit"
    }
}

/// Cuts `text` to at most `width` display columns, marking the cut with `…`.
fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_owned();
    }

    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        truncated.push(ch);
    }

    if width > 0 {
        truncated.push('…');
    }
    truncated
}
