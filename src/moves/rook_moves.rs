//! Orthogonal rays and the shared ray tracer used by all sliding pieces.

use crate::game_state::chess_types::{offset_square, Board, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Walk from `square` one step at a time until the edge or the first
/// occupied square. The blocker is included; the caller decides whether it
/// is a capture.
pub fn trace_ray(board: &Board, square: Square, file_step: i8, rank_step: i8, out: &mut Vec<Square>) {
    let mut current = square;
    while let Some(next) = offset_square(current, file_step, rank_step) {
        out.push(next);
        if board[next as usize].is_some() {
            break;
        }
        current = next;
    }
}

/// Rook destinations from `square`, ray by ray in direction order.
pub fn rook_targets(board: &Board, square: Square, out: &mut Vec<Square>) {
    for (file_step, rank_step) in ROOK_DIRECTIONS {
        trace_ray(board, square, file_step, rank_step, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn rook_on_empty_board_reaches_fourteen_squares() {
        let board: Board = [None; 64];
        let mut out = Vec::new();
        rook_targets(&board, 27, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn ray_stops_at_and_includes_blocker() {
        let mut board: Board = [None; 64];
        board[3] = Some(Piece::new(Color::Black, PieceKind::Knight));
        let mut out = Vec::new();
        trace_ray(&board, 0, 1, 0, &mut out);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn rightward_ray_from_h_file_is_empty() {
        let board: Board = [None; 64];
        let mut out = Vec::new();
        trace_ray(&board, 15, 1, 0, &mut out);
        assert!(out.is_empty());
    }
}
