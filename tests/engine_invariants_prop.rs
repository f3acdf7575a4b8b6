//! Property tests for the engine's movement and locking rules.
//!
//! Random action rollouts must keep these true after every call:
//! - the score never decreases and is a multiple of the row score
//! - no complete row survives a call
//! - a running engine's active piece never overlaps walls, floor or blocks
//! - a blocked move or rejected rotation changes nothing
//! - game over is absorbing

use proptest::prelude::*;

use blockfall::core::{standard_palette, Engine, EngineConfig, Grid, Shape};
use blockfall::types::{Color, MoveResult};

#[derive(Debug, Clone, Copy)]
enum Step {
    Left,
    Right,
    Up,
    Rotate,
    Advance,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        1 => Just(Step::Left),
        1 => Just(Step::Right),
        1 => Just(Step::Up),
        2 => Just(Step::Rotate),
        5 => Just(Step::Advance),
    ]
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    (1usize..5, 1usize..5)
        .prop_flat_map(|(h, w)| prop::collection::vec(prop::collection::vec(any::<bool>(), w), h))
        .prop_filter_map("shape needs a block", |matrix| Shape::new(matrix).ok())
}

fn reference_collides(grid: &Grid, shape: &Shape, origin_row: i32, origin_col: i32) -> bool {
    for r in 0..shape.height() {
        for c in 0..shape.width() {
            if !shape.get(r, c) {
                continue;
            }
            let row = origin_row + r as i32;
            let col = origin_col + c as i32;
            if col < 0 || col >= grid.cols() as i32 || row >= grid.rows() as i32 {
                return true;
            }
            if row >= 0 && grid.get(row, col) != Some(None) {
                return true;
            }
        }
    }
    false
}

fn check_rollout(config: EngineConfig, steps: &[Step]) -> Result<(), TestCaseError> {
    let line_score = config.line_score;
    let mut engine = Engine::new(config).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let mut game_overs = 0;

    for &step in steps {
        let was_over = engine.game_over();
        let score_before = engine.score();
        let grid_before = engine.grid().clone();
        let piece_before = engine.active().clone();

        let unchanged = match step {
            Step::Left => engine.try_move(-1, 0) == MoveResult::Blocked,
            Step::Right => engine.try_move(1, 0) == MoveResult::Blocked,
            Step::Up => engine.try_move(0, -1) == MoveResult::Blocked,
            Step::Rotate => !engine.rotate(),
            Step::Advance => engine.advance() == MoveResult::Blocked,
        };

        if unchanged || was_over {
            prop_assert_eq!(engine.grid(), &grid_before);
            prop_assert_eq!(engine.active(), &piece_before);
            prop_assert_eq!(engine.score(), score_before);
        }
        if was_over {
            prop_assert!(engine.game_over());
        }

        prop_assert!(engine.score() >= score_before);
        prop_assert_eq!(engine.score() % line_score, 0);
        for row in 0..engine.grid().rows() {
            prop_assert!(!engine.grid().is_row_full(row));
        }

        if !engine.game_over() {
            let piece = engine.active();
            prop_assert!(!engine.collides(&piece.shape, piece.origin_row, piece.origin_col));
        }

        if let Some(event) = engine.take_last_event() {
            prop_assert_eq!(event.score_gained, event.lines_cleared * line_score);
            if event.game_over {
                game_overs += 1;
            }
        }
    }

    prop_assert!(game_overs <= 1);
    prop_assert_eq!(game_overs == 1, engine.game_over());
    Ok(())
}

proptest! {
    #[test]
    fn rollout_on_default_grid_keeps_invariants(
        seed in any::<u32>(),
        steps in prop::collection::vec(step_strategy(), 1..400),
    ) {
        check_rollout(EngineConfig::default().with_seed(seed), &steps)?;
    }

    #[test]
    fn rollout_on_small_grid_keeps_invariants(
        seed in any::<u32>(),
        steps in prop::collection::vec(step_strategy(), 1..300),
    ) {
        // Small enough that most rollouts reach game over.
        let config = EngineConfig::default().with_rows(6).with_cols(5).with_seed(seed);
        check_rollout(config, &steps)?;
    }

    #[test]
    fn collides_matches_reference(
        rows in 4usize..12,
        cols in 4usize..12,
        fill in prop::collection::vec(any::<bool>(), 144),
        shape in shape_strategy(),
        origin_row in -5i32..14,
        origin_col in -5i32..14,
    ) {
        let grid_rows: Vec<Vec<_>> = (0..rows)
            .map(|r| (0..cols).map(|c| fill[r * 12 + c].then_some(Color::Blue)).collect())
            .collect();
        let grid = Grid::from_rows(grid_rows).unwrap();
        let config = EngineConfig::default().with_rows(rows).with_cols(cols);
        let engine = Engine::with_grid(config, grid.clone()).unwrap();

        prop_assert_eq!(
            engine.collides(&shape, origin_row, origin_col),
            reference_collides(&grid, &shape, origin_row, origin_col)
        );
    }

    #[test]
    fn two_rotations_make_a_half_turn(shape in shape_strategy()) {
        let twice = shape.rotate_cw().rotate_cw();
        let (h, w) = (shape.height(), shape.width());
        prop_assert_eq!((twice.height(), twice.width()), (h, w));
        for r in 0..h {
            for c in 0..w {
                prop_assert_eq!(twice.get(h - 1 - r, w - 1 - c), shape.get(r, c));
            }
        }
    }

    #[test]
    fn rotation_keeps_cell_count(shape in shape_strategy(), turns in 0usize..4) {
        let mut rotated = shape.clone();
        for _ in 0..turns {
            rotated = rotated.rotate_cw();
        }
        prop_assert_eq!(rotated.cell_count(), shape.cell_count());
    }
}

#[test]
fn standard_shapes_half_turn() {
    for entry in standard_palette() {
        let shape = &entry.shape;
        let twice = shape.rotate_cw().rotate_cw();
        let (h, w) = (shape.height(), shape.width());
        for r in 0..h {
            for c in 0..w {
                assert_eq!(
                    twice.get(h - 1 - r, w - 1 - c),
                    shape.get(r, c),
                    "piece {}",
                    entry.name
                );
            }
        }
    }
}
