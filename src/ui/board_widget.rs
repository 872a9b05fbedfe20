use crate::game::{Board, Cell, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => {
            Span::styled(" \u{25cf} ", Style::default().fg(player_color(player)))
        }
    }
}

/// Board lines with column labels, a frame, and an optional column cursor.
///
/// Produces `rows + 4` lines: labels, top border, one line per row, bottom
/// border, cursor.
pub fn board_lines(board: &Board, selected_column: Option<usize>) -> Vec<Line<'static>> {
    let cols = board.cols();
    let mut lines = Vec::with_capacity(board.rows() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        let label = format!("{:^3}", col);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let inner = "═".repeat(3 * cols + 1);
    lines.push(Line::from(format!("  ╔{inner}╗")));

    for row in board.iter_rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        row_spans.extend(row.iter().map(|&cell| cell_span(cell)));
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{inner}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if Some(col) == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
