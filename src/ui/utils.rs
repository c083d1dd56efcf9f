use ratatui::style::Color;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use crate::app::App;
use crate::config::{Theme, APP_NAME};

pub fn hex_to_rgb(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    } else {
        Color::White
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptTier {
    Low,
    Medium,
    High,
}

pub fn attempt_tier(attempts: u32) -> AttemptTier {
    if attempts < 25 {
        AttemptTier::Low
    } else if attempts < 50 {
        AttemptTier::Medium
    } else {
        AttemptTier::High
    }
}

pub fn attempt_color(theme: &Theme, attempts: u32) -> Color {
    match attempt_tier(attempts) {
        AttemptTier::Low => hex_to_rgb(&theme.correct),
        AttemptTier::Medium => hex_to_rgb(&theme.main),
        AttemptTier::High => hex_to_rgb(&theme.error),
    }
}

pub fn render_header(f: &mut Frame, app: &App) {
    let mut header_spans = vec![Span::styled(
        APP_NAME,
        Style::default()
            .fg(hex_to_rgb(&app.theme.main))
            .add_modifier(Modifier::BOLD),
    )];

    if app.session.board().is_some() {
        let attempts = app.session.attempts;
        header_spans.push(Span::styled(
            " | attempts: ",
            Style::default().fg(hex_to_rgb(&app.theme.sub)),
        ));
        header_spans.push(Span::styled(
            attempts.to_string(),
            Style::default()
                .fg(attempt_color(&app.theme, attempts))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let header_row_area = Rect::new(0, 1, f.area().width, 1);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(90),
            Constraint::Fill(1),
        ])
        .split(header_row_area);

    f.render_widget(Paragraph::new(Line::from(header_spans)), header_layout[1]);
}

pub fn render_footer(f: &mut Frame, app: &App) {
    let keys = if app.session.board().is_some() {
        "enter: guess | ctrl+d: description | ctrl+r: vowel | ↑/↓: history | tab: new article | esc: quit"
    } else {
        "tab: new article | esc: quit"
    };
    let footer = Paragraph::new(keys)
        .style(Style::default().fg(hex_to_rgb(&app.theme.sub_alt)))
        .alignment(Alignment::Center);
    let height = f.area().height;
    f.render_widget(footer, Rect::new(0, height.saturating_sub(1), f.area().width, 1));
}
