use crate::app::App;
use crate::models::GuessRecord;
use crate::ui::utils::hex_to_rgb;
use crate::utils::strings::sanitize_for_display;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Guesses newest first, each paired with its 1-based position in the
/// order they were made (so numbering counts down, like a reversed list).
pub fn newest_first(guesses: &[GuessRecord]) -> impl Iterator<Item = (usize, &GuessRecord)> {
    guesses.iter().enumerate().rev().map(|(i, g)| (i + 1, g))
}

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let guesses = &app.session.guesses;
    let width = guesses.len().to_string().len();

    let lines: Vec<Line> = newest_first(guesses)
        .map(|(n, guess)| {
            let style = if guess.is_correct {
                Style::default()
                    .fg(hex_to_rgb(&theme.correct))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(hex_to_rgb(&theme.sub))
            };
            let word: String = guess.word.chars().map(sanitize_for_display).collect();
            Line::from(vec![
                Span::styled(
                    format!("{n:>width$}. "),
                    Style::default().fg(hex_to_rgb(&theme.sub_alt)),
                ),
                Span::styled(word, style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(hex_to_rgb(&theme.sub_alt)))
        .title(Span::styled(" guesses ", Style::default().fg(hex_to_rgb(&theme.text))));

    let scroll = app.history_scroll.min(guesses.len().saturating_sub(1)) as u16;
    f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}
