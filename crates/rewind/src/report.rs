//! Plain-text rendering of a game, for `--print`.

use rewind_tictactoe::{GameHistory, GameView};

/// Renders the board, status line and move list as plain text.
///
/// Winning cells are wrapped in brackets; the current move list entry is
/// prefixed with `>`.
pub fn render(game: &GameHistory) -> String {
    let view = GameView::from_history(game);
    let mut out = String::new();

    for (row, cells) in view.cells.chunks(3).enumerate() {
        let line: Vec<String> = cells
            .iter()
            .map(|cell| {
                let mark = cell
                    .square
                    .player()
                    .map_or_else(|| " ".to_string(), |player| player.to_string());
                if cell.highlighted {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(&line.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&view.status);
    out.push_str("\n\n");

    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}", marker, entry.index + 1, entry.label));
        if let Some(location) = entry.location_label() {
            out.push(' ');
            out.push_str(&location);
        }
        out.push('\n');
    }
    out
}
