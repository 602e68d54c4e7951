//! Application state and key handling.

use super::input::{Action, Direction, move_selector};
use derive_getters::Getters;
use rewind_tictactoe::{GameHistory, Position};
use tracing::{debug, info, instrument};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// The game history is the only game state; the selector and the move list
/// selection are UI-only.
#[derive(Debug, Getters)]
pub struct App {
    game: GameHistory,
    selector: Position,
    focus: Focus,
    selected_entry: usize,
    #[getter(skip)]
    quit: bool,
}

impl App {
    /// Creates an application around an existing history.
    pub fn new(game: GameHistory) -> Self {
        let selected_entry = game.cursor();
        Self {
            game,
            selector: Position::Center,
            focus: Focus::Board,
            selected_entry,
            quit: false,
        }
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies one key action.
    #[instrument(skip(self), fields(cursor = self.game.cursor(), focus = ?self.focus))]
    pub fn handle(&mut self, action: Action) {
        debug!("Handling action");
        match action {
            Action::Quit => self.quit = true,
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected_entry = self.game.cursor();
            }
            Action::Navigate(direction) => self.navigate(direction),
            Action::Confirm => match self.focus {
                Focus::Board => self.play(self.selector),
                Focus::Moves => self.jump(self.selected_entry),
            },
            Action::PlayIndex(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.selector = pos;
                    self.play(pos);
                }
            }
            Action::EntryUp => self.select_entry(self.selected_entry.saturating_sub(1)),
            Action::EntryDown => self.select_entry(self.selected_entry + 1),
            Action::JumpToSelected => self.jump(self.selected_entry),
            Action::StepBack => {
                self.game.step_back();
                self.selected_entry = self.game.cursor();
            }
            Action::StepForward => {
                self.game.step_forward();
                self.selected_entry = self.game.cursor();
            }
            Action::JumpToStart => self.jump(0),
            Action::JumpToLatest => self.jump(self.game.len() - 1),
        }
    }

    fn navigate(&mut self, direction: Direction) {
        match (self.focus, direction) {
            (Focus::Board, _) => self.selector = move_selector(self.selector, direction),
            (Focus::Moves, Direction::Up) => self.select_entry(self.selected_entry.saturating_sub(1)),
            (Focus::Moves, Direction::Down) => self.select_entry(self.selected_entry + 1),
            (Focus::Moves, _) => {}
        }
    }

    fn select_entry(&mut self, index: usize) {
        self.selected_entry = index.min(self.game.len() - 1);
    }

    fn play(&mut self, pos: Position) {
        match self.game.try_apply_move(pos) {
            Ok(()) => {
                if let Some(played) = self.game.moves().last() {
                    info!(%played, "Move played");
                }
            }
            Err(e) => debug!(error = %e, "Move ignored"),
        }
        self.selected_entry = self.game.cursor();
    }

    fn jump(&mut self, index: usize) {
        self.game.jump_to(index);
        self.selected_entry = self.game.cursor();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameHistory::new())
    }
}
