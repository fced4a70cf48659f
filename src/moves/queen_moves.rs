//! Queen rays: the rook directions followed by the bishop directions.

use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::{trace_ray, ROOK_DIRECTIONS};

pub fn queen_targets(board: &Board, square: Square, out: &mut Vec<Square>) {
    for (file_step, rank_step) in ROOK_DIRECTIONS.into_iter().chain(BISHOP_DIRECTIONS) {
        trace_ray(board, square, file_step, rank_step, out);
    }
}
