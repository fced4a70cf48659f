//! Rook move generation.
//!
//! Casts the four orthogonal rays from the rook's square and emits a quiet
//! move per empty square plus a capture on an enemy blocker.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::rook_moves::rook_targets;

pub fn generate_rook_moves(game_state: &GameState, from: Square, mover: Piece, out: &mut Vec<ChessMove>) {
    let mut targets = Vec::with_capacity(14);
    rook_targets(&game_state.board, from, &mut targets);
    push_targets(game_state, from, mover, targets, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;

    #[test]
    fn rook_stops_on_capture_and_before_friend() {
        let game = GameState::from_fen("k7/8/8/8/r2R1P2/8/8/K7 w - - 0 1").expect("FEN should parse");
        let rook = game.piece_on(27).expect("rook on d4");
        let mut out = Vec::new();
        generate_rook_moves(&game, 27, rook, &mut out);

        let captures: Vec<_> = out.iter().filter(|mv| mv.is_capture).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to, 24);
        assert_eq!(captures[0].captured_piece, Some(PieceKind::Rook));
        // e4 empty, f4 friendly pawn.
        assert!(out.iter().any(|mv| mv.to == 28));
        assert!(!out.iter().any(|mv| mv.to == 29 || mv.to == 30));
        // 7 vertical + b4, c4, a4 capture + e4.
        assert_eq!(out.len(), 11);
    }
}
