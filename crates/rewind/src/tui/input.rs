//! Key bindings and board selector movement.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Arrow key; moves the board selector or the move list selection.
    Navigate(Direction),
    /// Enter/Space; plays the selected cell or jumps to the selected entry.
    Confirm,
    /// Digit key; plays a cell directly (0-based index).
    PlayIndex(usize),
    /// Select the previous move list entry.
    EntryUp,
    /// Select the next move list entry.
    EntryDown,
    /// Jump to the selected move list entry.
    JumpToSelected,
    /// Cursor one snapshot back.
    StepBack,
    /// Cursor one snapshot forward.
    StepForward,
    /// Jump to the game start.
    JumpToStart,
    /// Jump to the newest snapshot.
    JumpToLatest,
    /// Switch focus between board and move list.
    ToggleFocus,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, if it is bound.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Tab => Action::ToggleFocus,
        KeyCode::Up => Action::Navigate(Direction::Up),
        KeyCode::Down => Action::Navigate(Direction::Down),
        KeyCode::Left => Action::Navigate(Direction::Left),
        KeyCode::Right => Action::Navigate(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
        KeyCode::Char(c @ '1'..='9') => Action::PlayIndex(c as usize - '1' as usize),
        KeyCode::Char('[') | KeyCode::PageUp => Action::EntryUp,
        KeyCode::Char(']') | KeyCode::PageDown => Action::EntryDown,
        KeyCode::Char('g') => Action::JumpToSelected,
        KeyCode::Char('u') | KeyCode::Backspace => Action::StepBack,
        KeyCode::Char('r') => Action::StepForward,
        KeyCode::Home => Action::JumpToStart,
        KeyCode::End => Action::JumpToLatest,
        _ => return None,
    };
    Some(action)
}

/// Moves the board selector one cell, stopping at the edges.
pub fn move_selector(selector: Position, direction: Direction) -> Position {
    let (row, column) = (selector.row(), selector.column());
    let (row, column) = match direction {
        Direction::Up => (row.saturating_sub(1), column),
        Direction::Down => ((row + 1).min(2), column),
        Direction::Left => (row, column.saturating_sub(1)),
        Direction::Right => (row, (column + 1).min(2)),
    };
    Position::from_row_column(row, column).unwrap_or(selector)
}
