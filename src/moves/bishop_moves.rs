//! Diagonal rays.

use crate::game_state::chess_types::{Board, Square};
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub fn bishop_targets(board: &Board, square: Square, out: &mut Vec<Square>) {
    for (file_step, rank_step) in BISHOP_DIRECTIONS {
        trace_ray(board, square, file_step, rank_step, out);
    }
}
