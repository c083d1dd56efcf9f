pub mod board;
pub mod history;
pub mod utils;

use crate::app::App;
use crate::game::session::LOAD_ERROR_MESSAGE;
use crate::game::{Board, Phase};
use crate::ui::utils::{hex_to_rgb, render_footer, render_header};
use crate::utils::strings::sanitize_for_display;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let bg_color = hex_to_rgb(&app.theme.bg);
    f.render_widget(
        Block::default().style(Style::default().bg(bg_color)),
        f.area(),
    );

    render_header(f, app);

    let main_area = Rect::new(
        0,
        3,
        f.area().width,
        f.area().height.saturating_sub(4),
    );

    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(90),
            Constraint::Fill(1),
        ])
        .split(main_area);
    let area = horizontal_layout[1];

    match &app.session.phase {
        _ if app.is_loading() => {
            draw_message(f, area, "Loading a random article…", &app.theme.sub)
        }
        Phase::Failed => draw_message(f, area, LOAD_ERROR_MESSAGE, &app.theme.error),
        Phase::Ready(board) => draw_game(f, app, board, area),
        Phase::Loading => {}
    }

    render_footer(f, app);
}

fn draw_message(f: &mut Frame, area: Rect, text: &str, color: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(hex_to_rgb(color))),
        chunks[1],
    );
}

fn draw_game(f: &mut Frame, app: &App, board: &Board, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Length(2), Constraint::Fill(1)])
        .split(rows[0]);

    board::draw(f, app, board, columns[0]);
    history::draw(f, app, columns[2]);

    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(hex_to_rgb(&app.theme.main))),
        Span::styled(
            app.input.chars().map(sanitize_for_display).collect::<String>(),
            Style::default().fg(hex_to_rgb(&app.theme.text)),
        ),
        Span::styled(" ", Style::default().bg(hex_to_rgb(&app.theme.caret))),
    ]);
    f.render_widget(Paragraph::new(input_line), rows[2]);

    if app.session.show_hint {
        let article = board.article();
        let hint = if article.has_description() {
            format!("We are looking for: \"{}\"", article.description)
        } else {
            "No description available for this article.".to_string()
        };
        let hint: String = hint.chars().map(sanitize_for_display).collect();
        f.render_widget(
            Paragraph::new(hint)
                .style(
                    Style::default()
                        .fg(hex_to_rgb(&app.theme.sub))
                        .add_modifier(Modifier::ITALIC),
                )
                .wrap(Wrap { trim: true }),
            rows[3],
        );
    }
}
