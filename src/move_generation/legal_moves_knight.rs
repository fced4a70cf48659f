use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(game_state: &GameState, from: Square, mover: Piece, out: &mut Vec<ChessMove>) {
    push_targets(game_state, from, mover, knight_targets(from), out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_knights_have_two_moves_each() {
        let game = GameState::new_game();
        for from in [1u8, 6, 57, 62] {
            let knight = game.piece_on(from).expect("knight on home square");
            let mut out = Vec::new();
            generate_knight_moves(&game, from, knight, &mut out);
            assert_eq!(out.len(), 2, "knight on {from}");
            assert!(out.iter().all(|mv| !mv.is_capture));
        }
    }

    #[test]
    fn knight_captures_enemy_but_not_friend() {
        let game = GameState::from_fen("8/8/8/2p1P3/8/3N4/8/K6k w - - 0 1").expect("FEN should parse");
        let knight = game.piece_on(19).expect("knight on d3");
        let mut out = Vec::new();
        generate_knight_moves(&game, 19, knight, &mut out);
        // c5 is an enemy pawn, e5 a friendly one.
        assert!(out.iter().any(|mv| mv.to == 34 && mv.is_capture));
        assert!(!out.iter().any(|mv| mv.to == 36));
    }
}
