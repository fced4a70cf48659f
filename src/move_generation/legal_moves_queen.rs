//! Queen move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::queen_moves::queen_targets;

pub fn generate_queen_moves(game_state: &GameState, from: Square, mover: Piece, out: &mut Vec<ChessMove>) {
    let mut targets = Vec::with_capacity(27);
    queen_targets(&game_state.board, from, &mut targets);
    push_targets(game_state, from, mover, targets, out);
}
