//! Playing the `--moves` list before the game is shown.

use rewind_tictactoe::GameHistory;
use tracing::{instrument, warn};

/// Plays raw cell indices in order.
///
/// Occupied or out-of-range entries are skipped with a warning, the same
/// way a click on them would be ignored.
#[instrument]
pub fn replay_indices(indices: &[usize]) -> GameHistory {
    let mut game = GameHistory::new();
    for &index in indices {
        if let Err(e) = game.try_apply_index(index) {
            warn!(index, error = %e, "Skipping move from --moves");
        }
    }
    game
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Move, Player, Position};

    #[test]
    fn test_plays_indices_in_order() {
        let game = replay_indices(&[4, 0, 8]);
        assert_eq!(
            game.moves(),
            vec![
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopLeft),
                Move::new(Player::X, Position::BottomRight),
            ]
        );
        assert!(game.is_at_latest());
    }

    #[test]
    fn test_skips_occupied_and_out_of_range_entries() {
        let game = replay_indices(&[0, 0, 9, 4]);
        assert_eq!(game.len(), 3);
        assert_eq!(game.cursor(), 2);
        assert_eq!(
            game.moves(),
            vec![
                Move::new(Player::X, Position::TopLeft),
                Move::new(Player::O, Position::Center),
            ]
        );
    }

    #[test]
    fn test_empty_list_is_a_new_game() {
        assert_eq!(replay_indices(&[]), GameHistory::new());
    }
}
