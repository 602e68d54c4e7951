//! Stateless UI rendering for the game and its move list.

use super::app::{App, Focus};
use crate::config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{CellView, GameView, MoveEntry, Player, Square};

/// Draws one frame: title, board, move list, status and key help.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) {
    let view = GameView::from_history(app.game());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(13),   // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(24)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app, &view, palette);
    draw_moves(frame, panes[1], app, &view.moves);

    let status = Paragraph::new(view.status.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move  enter play  1-9 play  tab switch pane  u/r step  [ ] g jump  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default().title(title).borders(Borders::ALL).border_style(border)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView, palette: &Palette) {
    let block = pane_block("Board", *app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, cells) in view.cells.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], cells, app, palette);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[CellView], app: &App, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[i * 2], cell, app, palette);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, app: &App, palette: &Palette) {
    let (symbol, base_style) = match cell.square {
        Square::Empty => (
            format!("{}", cell.position.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => {
            let fg = match player {
                Player::X => palette.x,
                Player::O => palette.o,
            };
            (
                player.to_string(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )
        }
    };

    let style = if cell.highlighted {
        base_style.bg(palette.highlight)
    } else {
        base_style
    };
    let style = if *app.focus() == Focus::Board && cell.position == *app.selector() {
        style.bg(palette.selector).fg(Color::Black)
    } else {
        style
    };

    // Pad vertically so the mark sits in the middle of the 3-line cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, moves: &[MoveEntry]) {
    let focused = *app.focus() == Focus::Moves;
    let items: Vec<ListItem> = moves
        .iter()
        .map(|entry| {
            let mut spans = vec![Span::raw(format!("{:>2}. ", entry.index + 1))];
            let label_style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
            };
            spans.push(Span::styled(entry.label.clone(), label_style));
            if let Some(location) = entry.location_label() {
                spans.push(Span::styled(format!(" {}", location), Style::default().fg(Color::DarkGray)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block("Moves", focused))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(focused.then_some(*app.selected_entry()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::Action;
    use ratatui::{Terminal, backend::TestBackend};
    use rewind_tictactoe::{GameHistory, Position};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 22)).expect("test terminal");
        terminal
            .draw(|f| draw(f, app, &Palette::default()))
            .expect("draw succeeds");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_new_game_frame() {
        let text = render(&App::default());
        assert!(text.contains("Next player: X"));
        assert!(text.contains("You are at move #0"));
        assert!(!text.contains("Go to game start"));
    }

    #[test]
    fn test_won_game_frame_lists_every_move() {
        let app = App::new(GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ]));
        let text = render(&app);
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("Go to move #4"));
        assert!(text.contains("You are at move #5"));
    }

    #[test]
    fn test_winning_cells_use_highlight_colour() {
        let app = App::new(GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ]));
        let mut terminal = Terminal::new(TestBackend::new(90, 22)).expect("test terminal");
        let palette = Palette::default();
        terminal.draw(|f| draw(f, &app, &palette)).expect("draw succeeds");
        let highlighted = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "X" && cell.bg == palette.highlight)
            .count();
        assert_eq!(highlighted, 3);
    }

    fn rows(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(90, 22)).expect("test terminal");
        terminal
            .draw(|f| draw(f, app, &Palette::default()))
            .expect("draw succeeds");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_selection_marker_sits_on_selected_entry() {
        let mut app = App::new(GameHistory::replay(&[Position::TopLeft, Position::Center]));
        app.handle(Action::ToggleFocus);
        app.handle(Action::EntryUp);

        let rows = rows(&app);
        let selected = rows
            .iter()
            .find(|row| row.contains("Go to move #1"))
            .expect("entry for move 1 is drawn");
        assert!(selected.contains(">  2. Go to move #1"), "{selected}");

        for label in ["Go to game start", "You are at move #2"] {
            let row = rows.iter().find(|row| row.contains(label)).expect("entry is drawn");
            assert!(!row.contains('>'), "{row}");
        }
    }

    #[test]
    fn test_no_selection_marker_while_board_has_focus() {
        let app = App::new(GameHistory::replay(&[Position::TopLeft]));
        assert!(rows(&app).iter().all(|row| !row.contains('>')));
    }
}
