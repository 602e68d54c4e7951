//! Delta invariant: consecutive snapshots differ by one newly placed mark.

use super::super::{GameHistory, Square};
use super::Invariant;

/// Invariant: `snapshots[i + 1]` equals `snapshots[i]` plus exactly one mark.
///
/// The changed cell goes from empty to occupied. Marks never move or vanish.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots().windows(2).all(|pair| {
            let changed = pair[0].diff(&pair[1]);
            match changed.as_slice() {
                [pos] => pair[0].get(*pos) == Square::Empty && pair[1].get(*pos) != Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
