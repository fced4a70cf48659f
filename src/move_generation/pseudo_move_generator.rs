//! Pseudo-legal move generation for a single square.
//!
//! Dispatches on the piece kind found on the square. The result ignores
//! whether the move leaves the mover's own king in check; castling is the
//! only case that already accounts for attacked squares.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::ChessMove;

/// Pseudo-legal moves of whichever piece stands on `square`, for either color.
/// An empty square yields no moves.
pub fn generate_pseudo_moves(game_state: &GameState, square: Square) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(28);
    generate_pseudo_moves_into(game_state, square, &mut out);
    out
}

pub fn generate_pseudo_moves_into(game_state: &GameState, square: Square, out: &mut Vec<ChessMove>) {
    let Some(mover) = game_state.piece_on(square) else {
        return;
    };

    match mover.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, square, mover, out),
        PieceKind::Knight => generate_knight_moves(game_state, square, mover, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, square, mover, out),
        PieceKind::Rook => generate_rook_moves(game_state, square, mover, out),
        PieceKind::Queen => generate_queen_moves(game_state, square, mover, out),
        PieceKind::King => generate_king_moves(game_state, square, mover, out),
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pseudo_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn empty_square_has_no_moves() {
        let game = GameState::new_game();
        assert!(generate_pseudo_moves(&game, 28).is_empty());
    }

    #[test]
    fn pinned_piece_still_has_pseudo_moves() {
        // Knight on e2 is pinned by the rook on e8.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(generate_pseudo_moves(&game, 12).len(), 6);
    }

    #[test]
    fn works_for_side_not_to_move() {
        let game = GameState::new_game();
        // Black knight on b8.
        assert_eq!(generate_pseudo_moves(&game, 57).len(), 2);
    }
}
