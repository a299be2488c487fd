//! Property-based tests for placement, gravity, turn order and terminal states
use proptest::prelude::*;

use super::{
    Cell, Dimensions, DropSpot, GameEngine, GameStatus, Placement, PlacementError, Player, Seat,
};

/// Board dimensions up to 8x8 plus a sequence of in-range columns.
fn game_moves() -> impl Strategy<Value = (Dimensions, Vec<usize>)> {
    (1usize..=8, 1usize..=8).prop_flat_map(|(height, width)| {
        (
            Just(Dimensions::new(height, width)),
            prop::collection::vec(0..width, 0..96),
        )
    })
}

fn new_engine(dims: Dimensions) -> GameEngine {
    GameEngine::new(Player::new("A", "red"), Player::new("B", "blue"), dims)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: a fresh game has an empty board and is not over
    #[test]
    fn prop_initial_board_empty(height in 0usize..=10, width in 0usize..=10) {
        let engine = new_engine(Dimensions::new(height, width));
        prop_assert!(!engine.is_game_over());
        prop_assert_eq!(engine.moves_played(), 0);
        for row in 0..height {
            for col in 0..width {
                prop_assert_eq!(engine.cell(row, col), Some(Cell::Empty));
            }
        }
    }

    /// Property: accepted placements fill exactly one cell each, at the lowest
    /// empty row, and no occupied cell ever changes
    #[test]
    fn prop_gravity_and_monotonic_board((dims, moves) in game_moves()) {
        let mut engine = new_engine(dims);
        let mut accepted = 0usize;

        for col in moves {
            if engine.is_game_over() {
                break;
            }
            let before = engine.board().clone();
            let expected = before.lowest_empty_row(col).unwrap();
            let mover = engine.current_seat();

            let placement = engine.attempt_placement(col).unwrap();
            let after = engine.board();

            match expected {
                DropSpot::ColumnFull => {
                    prop_assert_eq!(placement, Placement::ColumnFull);
                    prop_assert_eq!(after, &before);
                }
                DropSpot::Row(row) => {
                    accepted += 1;
                    prop_assert_ne!(placement, Placement::ColumnFull);
                    prop_assert_eq!(before.get(row, col), Some(Cell::Empty));
                    prop_assert_eq!(after.get(row, col), Some(Cell::Taken(mover)));
                    for below in row + 1..dims.height {
                        prop_assert_ne!(after.get(below, col), Some(Cell::Empty));
                    }
                }
            }

            for r in 0..dims.height {
                for c in 0..dims.width {
                    if let Some(Cell::Taken(seat)) = before.get(r, c) {
                        prop_assert_eq!(after.get(r, c), Some(Cell::Taken(seat)));
                    }
                }
            }
            prop_assert_eq!(engine.moves_played(), accepted);
        }
    }

    /// Property: the turn passes on Continue and stays put on every other result
    #[test]
    fn prop_turn_alternation((dims, moves) in game_moves()) {
        let mut engine = new_engine(dims);

        for col in moves {
            if engine.is_game_over() {
                break;
            }
            let mover = engine.current_seat();
            match engine.attempt_placement(col).unwrap() {
                Placement::Continue => prop_assert_eq!(engine.current_seat(), mover.other()),
                Placement::Win(winner) => {
                    prop_assert_eq!(winner, mover);
                    prop_assert_eq!(engine.current_seat(), mover);
                }
                Placement::Tie | Placement::ColumnFull => {
                    prop_assert_eq!(engine.current_seat(), mover);
                }
            }
        }
    }

    /// Property: outcomes agree with the board. A win means the mover owns a
    /// line, Continue means nobody does, Tie means a full board with no line.
    #[test]
    fn prop_outcome_matches_board((dims, moves) in game_moves()) {
        let mut engine = new_engine(dims);

        for col in moves {
            if engine.is_game_over() {
                prop_assert_eq!(
                    engine.attempt_placement(col),
                    Err(PlacementError::GameAlreadyOver)
                );
                continue;
            }
            let placement = engine.attempt_placement(col).unwrap();
            let board = engine.board();
            match placement {
                Placement::Win(seat) => {
                    prop_assert!(board.has_line(seat));
                    prop_assert_eq!(engine.status(), GameStatus::Won(seat));
                    prop_assert!(engine.winning_line().is_some());
                }
                Placement::Tie => {
                    prop_assert!(board.is_full());
                    prop_assert!(!board.has_line(Seat::First));
                    prop_assert!(!board.has_line(Seat::Second));
                    prop_assert_eq!(engine.status(), GameStatus::Tied);
                }
                Placement::Continue | Placement::ColumnFull => {
                    prop_assert!(!board.has_line(Seat::First));
                    prop_assert!(!board.has_line(Seat::Second));
                    prop_assert_eq!(engine.status(), GameStatus::InProgress);
                }
            }
        }
    }

    /// Property: columns at or past the width are rejected without touching state
    #[test]
    fn prop_invalid_column_rejected(width in 1usize..=8, extra in 0usize..100) {
        let mut engine = new_engine(Dimensions::new(6, width));
        let col = width + extra;
        let result = engine.attempt_placement(col);
        prop_assert!(
            matches!(result, Err(PlacementError::InvalidColumn(_))),
            "expected InvalidColumn, got {:?}",
            result
        );
        prop_assert_eq!(engine.moves_played(), 0);
        prop_assert_eq!(engine.current_seat(), Seat::First);
    }
}
