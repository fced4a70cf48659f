//! Bishop move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, mover: Piece, out: &mut Vec<ChessMove>) {
    let mut targets = Vec::with_capacity(13);
    bishop_targets(&game_state.board, from, &mut targets);
    push_targets(game_state, from, mover, targets, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_bishops_are_blocked() {
        let game = GameState::new_game();
        let bishop = game.piece_on(2).expect("bishop on c1");
        let mut out = Vec::new();
        generate_bishop_moves(&game, 2, bishop, &mut out);
        assert!(out.is_empty());
    }
}
