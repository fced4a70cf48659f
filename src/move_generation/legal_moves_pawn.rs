use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::{
    is_promotion_square, pawn_capture_targets, pawn_forward, pawn_start_rank,
};

/// Pushes, double steps, diagonal captures and en passant for one pawn.
///
/// Moves onto the far rank are flagged `is_promotion`; the promotion piece is
/// left for the caller to fill in.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, mover: Piece, out: &mut Vec<ChessMove>) {
    let side = mover.color;
    let forward = pawn_forward(side);

    if let Some(one_step) = offset_square(from, 0, forward) {
        if game_state.piece_on(one_step).is_none() {
            out.push(flag_promotion(side, ChessMove::quiet(from, one_step, PieceKind::Pawn)));

            if square_rank(from) == pawn_start_rank(side) {
                if let Some(two_step) = offset_square(one_step, 0, forward) {
                    if game_state.piece_on(two_step).is_none() {
                        out.push(ChessMove::double_step(from, two_step));
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(side, from) {
        if let Some(captured) = enemy_piece_on(game_state, side, to) {
            out.push(flag_promotion(
                side,
                ChessMove::capture(from, to, PieceKind::Pawn, captured),
            ));
        } else if game_state.en_passant_square == Some(to)
            && game_state.side_to_move == side
            && game_state.piece_on(to).is_none()
        {
            out.push(ChessMove::en_passant(from, to));
        }
    }
}

#[inline]
fn flag_promotion(side: Color, mv: ChessMove) -> ChessMove {
    if is_promotion_square(side, mv.to) {
        mv.promoting()
    } else {
        mv
    }
}
