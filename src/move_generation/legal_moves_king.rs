//! King move generation, including castling.
//!
//! Castling is the one place where attack status is consulted during
//! pseudo-legal generation: the king may not castle out of, through, or into
//! an attacked square.

use crate::game_state::chess_rules::CASTLING_LAYOUTS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_attacked;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_king_moves(game_state: &GameState, from: Square, mover: Piece, out: &mut Vec<ChessMove>) {
    push_targets(game_state, from, mover, king_targets(from), out);
    generate_castling_moves(game_state, from, mover, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, mover: Piece, out: &mut Vec<ChessMove>) {
    let own_rook = Some(Piece::new(mover.color, PieceKind::Rook));

    for layout in CASTLING_LAYOUTS.iter().filter(|layout| layout.color == mover.color) {
        if !game_state.has_castling_right(layout.right) || king_from != layout.king_from {
            continue;
        }
        if game_state.piece_on(layout.rook_from) != own_rook {
            continue;
        }
        if layout
            .empty_squares
            .iter()
            .any(|&sq| game_state.piece_on(sq).is_some())
        {
            continue;
        }
        if layout
            .king_path
            .iter()
            .any(|&sq| is_attacked(game_state, mover.color, sq))
        {
            continue;
        }

        out.push(ChessMove::castle(layout.king_from, layout.king_to, layout.side));
    }
}
