//! Pure rendering of a session into styled text.
//!
//! The output is a function of the session alone, so the same
//! [`Text`] is drawn on the local terminal and on every telnet client.

use crate::session::{ReplayChoice, Session, SessionPhase};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use strictly_tictactoe::{Board, Position};

/// Colour of the row/column labels and help text.
pub const LABEL_STYLE: Style = Style::new().fg(Color::Indexed(241));

/// Style of the highlighted cell and the highlighted prompt answer.
pub const SELECTED_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

const HELP: &str = "arrows/wasd move · enter place · 1-3 then a-c jump · q quit";

/// Renders the board, labels, status line and prompt.
///
/// ```text
///   ┌───┬───┬───┐
/// 1 │ Χ │   │   │
///   ├───┼───┼───┤
/// 2 │   │ ● │   │
///   ├───┼───┼───┤
/// 3 │   │   │   │
///   └───┴───┴───┘
///     A   B   C
/// ```
pub fn render<R>(session: &Session<R>) -> Text<'static> {
    let highlight = (session.phase() == SessionPhase::Playing && session.selection_visible())
        .then(|| session.cursor().position());

    let mut lines = board_lines(session.game().board(), highlight);
    lines.push(Line::default());
    lines.push(Line::raw(session.status().to_string()));

    match session.phase() {
        SessionPhase::Playing => {
            let help = match session.pending_row() {
                Some(row) => format!("Move: {row}_"),
                None => HELP.to_string(),
            };
            lines.push(Line::styled(help, LABEL_STYLE));
        }
        SessionPhase::AwaitingReplay => lines.push(replay_prompt(session.replay_choice())),
    }

    Text::from(lines)
}

/// Grid with row labels on the left and column labels underneath.
fn board_lines(board: &Board, highlight: Option<Position>) -> Vec<Line<'static>> {
    let mut lines = vec![border_line('┌', '┬', '┐')];
    for row in 0..3 {
        if row > 0 {
            lines.push(border_line('├', '┼', '┤'));
        }
        lines.push(cell_line(board, row, highlight));
    }
    lines.push(border_line('└', '┴', '┘'));
    lines.push(Line::styled("    A   B   C", LABEL_STYLE));
    lines
}

fn border_line(left: char, middle: char, right: char) -> Line<'static> {
    let border = format!("  {left}───{middle}───{middle}───{right}");
    Line::raw(border)
}

fn cell_line(board: &Board, row: usize, highlight: Option<Position>) -> Line<'static> {
    let mut spans = vec![Span::styled(format!("{} ", row + 1), LABEL_STYLE)];
    for (column, square) in board.row(row).iter().enumerate() {
        let selected = highlight.is_some_and(|pos| pos.row() == row && pos.column() == column);
        let style = if selected { SELECTED_STYLE } else { Style::new() };
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(square.symbol().to_string(), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("│"));
    Line::from(spans)
}

fn replay_prompt(choice: ReplayChoice) -> Line<'static> {
    let answer = |label: &'static str, this: ReplayChoice| {
        let style = if choice == this { SELECTED_STYLE } else { Style::new() };
        Span::styled(format!(" {label} "), style)
    };
    Line::from(vec![
        Span::raw("Wanna play again? "),
        answer("Yes", ReplayChoice::Yes),
        Span::raw(" "),
        answer("No", ReplayChoice::No),
    ])
}
