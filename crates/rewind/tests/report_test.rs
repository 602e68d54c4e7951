//! Tests for the plain-text report used by `--print`.

use rewind::report;
use rewind_tictactoe::GameHistory;

#[test]
fn test_report_after_time_travel() {
    let mut game = GameHistory::new();
    for index in [0, 4, 1, 5] {
        game.apply_index(index);
    }
    game.jump_to(2);

    let text = report::render(&game);
    assert!(text.contains("Next player: X"));
    assert!(text.contains("  1. Go to game start\n"));
    assert!(text.contains("> 3. You are at move #2 (2, 2)\n"));
    assert!(text.contains("  5. Go to move #4 (2, 3)\n"));
    // Board shows snapshot 2 only: X top-left, O center.
    assert!(text.starts_with(" X |   |   \n---+---+---\n   | O |   \n"));
}
