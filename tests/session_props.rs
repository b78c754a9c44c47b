//! Property tests for the engine invariants.
//!
//! - `collides` agrees with a brute-force oracle on small random boards.
//! - Every refill-aligned run of 7 draws is a permutation of all kinds.
//! - Four turns in one direction restore a piece in open space.
//! - Clearing `lines_per_level * k` lines puts the session on level `k + 1`
//!   with the matching gravity interval.

use std::collections::HashSet;

use proptest::prelude::*;
use tetris_arena::core::{
    collides, line_clear_points, ActivePiece, Board, GameSession, PieceBag, PieceMatrix,
    SessionConfig,
};
use tetris_arena::types::{PieceKind, Rotation, EMPTY};

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::ALL[i])
}

fn oracle(board: &Board, matrix: &PieceMatrix, x: i32, y: i32) -> bool {
    let w = board.width() as i32;
    let h = board.height() as i32;
    for (row_i, row) in matrix.rows().enumerate() {
        for (col_i, &cell) in row.iter().enumerate() {
            if cell == EMPTY {
                continue;
            }
            let bx = x + col_i as i32;
            let by = y + row_i as i32;
            if bx < 0 || bx >= w || by >= h {
                return true;
            }
            if by >= 0 && board.get(bx, by) != Some(EMPTY) {
                return true;
            }
        }
    }
    false
}

proptest! {
    #[test]
    fn collision_matches_oracle(
        w in 4u16..8,
        h in 4u16..9,
        fill in prop::collection::vec(any::<bool>(), 64),
        kind in kind_strategy(),
        rot in 0usize..4,
        x in -5i32..12,
        y in -5i32..12,
    ) {
        let mut board = Board::new(w, h);
        for by in 0..h as i32 {
            for bx in 0..w as i32 {
                if fill[(by * w as i32 + bx) as usize % fill.len()] {
                    board.set(bx, by, 4);
                }
            }
        }
        let matrix = PieceMatrix::for_piece(kind, Rotation::from_index(rot));
        prop_assert_eq!(collides(&board, &matrix, x, y), oracle(&board, &matrix, x, y));
    }

    #[test]
    fn bag_cycles_are_permutations(seed in any::<u64>(), cycles in 1usize..20) {
        let mut bag = PieceBag::seeded(seed);
        for _ in 0..cycles {
            let chunk: HashSet<PieceKind> = (0..7).map(|_| bag.draw()).collect();
            prop_assert_eq!(chunk.len(), 7);
        }
    }

    #[test]
    fn four_rotations_are_identity(
        kind in kind_strategy(),
        clockwise in any::<bool>(),
        shift in -3i32..3,
        fall in 0usize..16,
    ) {
        let board = Board::default();
        let mut piece = ActivePiece::spawn(kind, &board);
        piece.shift(shift, &board);
        for _ in 0..fall {
            piece.drop_step(&board);
        }
        let start = piece.clone();
        for _ in 0..4 {
            prop_assert!(piece.rotate(clockwise, &board));
        }
        prop_assert_eq!(piece, start);
    }

    #[test]
    fn level_follows_total_lines(k in 0u32..40, per_level in 1u32..15) {
        let config = SessionConfig {
            lines_per_level: per_level,
            ..SessionConfig::default()
        };
        let mut session = GameSession::new(config, 0);
        session.start();
        for _ in 0..k {
            session.on_lines_cleared(per_level as usize);
        }
        prop_assert_eq!(session.lines(), per_level * k);
        prop_assert_eq!(session.level(), k + 1);
        let expected = config
            .initial_drop_interval_ms
            .saturating_sub(k * config.level_speed_step_ms)
            .max(config.min_drop_interval_ms);
        prop_assert_eq!(session.drop_interval_ms(), expected);
    }

    #[test]
    fn line_scores_scale_with_level(count in 1usize..=4, level in 1u32..30) {
        let base = [40, 100, 300, 1200][count - 1];
        prop_assert_eq!(line_clear_points(count, level), base * level);
    }
}
