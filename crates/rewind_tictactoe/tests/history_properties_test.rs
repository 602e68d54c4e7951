//! Property tests over arbitrary click and jump sequences.

use proptest::prelude::*;
use rewind_tictactoe::invariants::{HistoryInvariants, InvariantSet};
use rewind_tictactoe::{Board, GameHistory, Player, Position, Square, WINNING_LINES, check_winner};

#[derive(Debug, Clone)]
enum Action {
    Click(usize),
    Jump(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..9).prop_map(Action::Click),
        1 => (0usize..12).prop_map(Action::Jump),
    ]
}

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(|squares| {
        let mut board = Board::new();
        for (pos, sq) in Position::ALL.into_iter().zip(squares) {
            board.set(pos, sq);
        }
        board
    })
}

fn has_line(board: &Board) -> bool {
    WINNING_LINES.iter().any(|[a, b, c]| {
        let sq = board.get(*a);
        sq != Square::Empty && sq == board.get(*b) && sq == board.get(*c)
    })
}

proptest! {
    #[test]
    fn invariants_hold_for_any_action_sequence(actions in proptest::collection::vec(action(), 0..40)) {
        let mut game = GameHistory::new();
        for action in actions {
            match action {
                Action::Click(index) => game.apply_index(index),
                Action::Jump(index) => game.jump_to(index),
            }
            prop_assert!(HistoryInvariants::check_all(&game).is_ok());
            prop_assert!(!game.is_empty());
            prop_assert_eq!(game.to_move() == Player::X, game.cursor() % 2 == 0);
        }
    }

    #[test]
    fn click_either_appends_one_or_changes_nothing(
        actions in proptest::collection::vec(action(), 0..20),
        index in 0usize..9,
    ) {
        let mut game = GameHistory::new();
        for action in actions {
            match action {
                Action::Click(i) => game.apply_index(i),
                Action::Jump(i) => game.jump_to(i),
            }
        }
        let before = game.clone();
        let legal = game.winner().is_none()
            && game.current_board().get(Position::ALL[index]) == Square::Empty;

        game.apply_index(index);

        if legal {
            prop_assert_eq!(game.len(), before.cursor() + 2);
            prop_assert_eq!(game.cursor(), game.len() - 1);
            prop_assert_eq!(&game.snapshots()[..=before.cursor()], &before.snapshots()[..=before.cursor()]);
            prop_assert_eq!(game.move_location(game.cursor()), Some(Position::ALL[index]));
        } else {
            prop_assert_eq!(game, before);
        }
    }

    #[test]
    fn winner_matches_brute_force_line_check(board in board()) {
        match check_winner(&board) {
            Some(win) => {
                let [a, b, c] = win.line();
                let expected = Square::Occupied(win.winner());
                prop_assert_eq!(board.get(a), expected);
                prop_assert_eq!(board.get(b), expected);
                prop_assert_eq!(board.get(c), expected);
                // Reported line is the first complete one in check order.
                let first = WINNING_LINES.iter().position(|l| *l == win.line());
                let earlier_complete = WINNING_LINES[..first.unwrap_or(0)].iter().any(|[x, y, z]| {
                    let sq = board.get(*x);
                    sq != Square::Empty && sq == board.get(*y) && sq == board.get(*z)
                });
                prop_assert!(first.is_some());
                prop_assert!(!earlier_complete);
            }
            None => prop_assert!(!has_line(&board)),
        }
    }
}
