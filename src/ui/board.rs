use crate::app::App;
use crate::config::Theme;
use crate::game::board::{Board, Cell};
use crate::ui::utils::hex_to_rgb;
use crate::utils::strings::sanitize_for_display;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellStyle {
    Hidden,
    Revealed,
    Plain,
}

impl CellStyle {
    fn of(cell: &Cell) -> Self {
        if !cell.is_maskable() {
            CellStyle::Plain
        } else if cell.revealed {
            CellStyle::Revealed
        } else {
            CellStyle::Hidden
        }
    }

    fn style(self, theme: &Theme, bold: bool) -> Style {
        let style = match self {
            CellStyle::Hidden => Style::default().fg(hex_to_rgb(&theme.sub)),
            CellStyle::Revealed => Style::default()
                .fg(hex_to_rgb(&theme.correct))
                .add_modifier(Modifier::BOLD),
            CellStyle::Plain => Style::default().fg(hex_to_rgb(&theme.text)),
        };
        if bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

/// Turn board cells into plain text lines, one per source line, with runs of
/// identically styled cells merged. Article text is only ever emitted as
/// literal span content and control characters are blanked.
fn cell_runs(board: &Board, cells: &[Cell]) -> Vec<Vec<(CellStyle, String)>> {
    let mut lines: Vec<Vec<(CellStyle, String)>> = vec![Vec::new()];

    for cell in cells {
        if cell.ch == '\n' {
            lines.push(Vec::new());
            continue;
        }

        let kind = CellStyle::of(cell);
        let ch = sanitize_for_display(board.display_char(cell));
        let Some(line) = lines.last_mut() else {
            continue;
        };
        match line.last_mut() {
            Some((last, run)) if *last == kind => run.push(ch),
            _ => line.push((kind, ch.to_string())),
        }
    }

    lines
}

fn styled_lines(board: &Board, cells: &[Cell], theme: &Theme, bold: bool) -> Vec<Line<'static>> {
    cell_runs(board, cells)
        .into_iter()
        .map(|runs| {
            Line::from(
                runs.into_iter()
                    .map(|(kind, text)| Span::styled(text, kind.style(theme, bold)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

pub fn draw(f: &mut Frame, app: &App, board: &Board, area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let mut title = styled_lines(board, board.title_cells(), theme, true);
    if board.is_title_solved() {
        if let Some(line) = title.last_mut() {
            line.push_span(Span::styled(
                "  ✓ title found",
                Style::default().fg(hex_to_rgb(&theme.main)),
            ));
        }
    }
    f.render_widget(Paragraph::new(title).wrap(Wrap { trim: false }), chunks[0]);

    f.render_widget(
        Paragraph::new(styled_lines(board, board.extract_cells(), theme, false))
            .wrap(Wrap { trim: false }),
        chunks[1],
    );

    let glyphs = board.glyphs();
    let legend = Line::from(vec![
        Span::styled(
            format!("{} letter   {} digit   ", glyphs.letter, glyphs.digit),
            Style::default().fg(hex_to_rgb(&theme.sub)),
        ),
        Span::styled(
            format!("{} hidden", board.hidden_count()),
            Style::default().fg(hex_to_rgb(&theme.sub_alt)),
        ),
    ]);
    f.render_widget(Paragraph::new(legend), chunks[2]);
}
