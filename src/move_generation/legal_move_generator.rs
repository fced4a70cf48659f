//! Legal move generation.
//!
//! Every pseudo-legal candidate is applied to a copy of the position; the
//! candidate survives only if the mover's king is not attacked on the
//! resulting board. There is no incremental pin or check shortcut.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::move_generation::pseudo_move_generator::generate_pseudo_moves;
use crate::moves::move_descriptions::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        let mut legal = Vec::with_capacity(48);
        for square in game_state.squares_of(game_state.side_to_move) {
            legal.extend(
                legal_moves_with_results(game_state, square)
                    .into_iter()
                    .map(|(chess_move, game_after_move)| GeneratedMove {
                        chess_move,
                        game_after_move,
                    }),
            );
        }
        Ok(legal)
    }
}

/// Legal moves of the piece on `square`. Squares that are empty or hold a
/// piece of the side not to move yield nothing.
pub fn generate_legal_moves(game_state: &GameState, square: Square) -> Vec<ChessMove> {
    legal_moves_with_results(game_state, square)
        .into_iter()
        .map(|(mv, _)| mv)
        .collect()
}

/// Legal moves for every square of the side to move, in square order.
pub fn generate_all_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    game_state
        .squares_of(game_state.side_to_move)
        .flat_map(|square| generate_legal_moves(game_state, square))
        .collect()
}

pub fn has_legal_move(game_state: &GameState) -> bool {
    game_state
        .squares_of(game_state.side_to_move)
        .any(|square| !generate_legal_moves(game_state, square).is_empty())
}

fn legal_moves_with_results(game_state: &GameState, square: Square) -> Vec<(ChessMove, GameState)> {
    let Some(mover) = game_state.piece_on(square) else {
        return Vec::new();
    };
    if mover.color != game_state.side_to_move {
        return Vec::new();
    }

    generate_pseudo_moves(game_state, square)
        .into_iter()
        .filter_map(|mv| {
            let next = make_move(game_state, &mv, mover);
            // Illegal if own king is in check after move.
            if is_king_in_check(&next, mover.color) {
                None
            } else {
                Some((mv, next))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::king_square;
    use crate::move_generation::pseudo_move_generator::generate_pseudo_moves;

    const SAMPLE_FENS: [&str; 5] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        "4k3/8/8/2KPp2r/8/8/8/8 w - e6 0 2",
    ];

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let game = GameState::new_game();
        let moves = generate_all_legal_moves(&game);
        assert_eq!(moves.len(), 20);
        assert_eq!(moves.iter().filter(|mv| mv.moved_piece == PieceKind::Pawn).count(), 16);
        assert_eq!(moves.iter().filter(|mv| mv.is_double_step).count(), 8);
        assert_eq!(moves.iter().filter(|mv| mv.moved_piece == PieceKind::Knight).count(), 4);

        let generated = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("move generation should succeed");
        assert_eq!(generated.len(), 20);
    }

    #[test]
    fn legal_moves_are_a_subset_of_pseudo_moves() {
        for fen in SAMPLE_FENS {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            for square in game.squares_of(game.side_to_move) {
                let pseudo = generate_pseudo_moves(&game, square);
                for mv in generate_legal_moves(&game, square) {
                    assert!(pseudo.contains(&mv), "{fen}: {mv:?}");
                }
            }
        }
    }

    #[test]
    fn no_legal_move_leaves_own_king_attacked() {
        for fen in SAMPLE_FENS {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            let mover = game.side_to_move;
            for generated in LegalMoveGenerator
                .generate_legal_moves(&game)
                .expect("move generation should succeed")
            {
                let after = generated.game_after_move;
                let king = king_square(&after, mover).expect("king survives");
                assert!(
                    !crate::move_generation::legal_move_checks::is_attacked(&after, mover, king),
                    "{fen}: {:?}",
                    generated.chess_move
                );
            }
        }
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(generate_legal_moves(&game, 12).is_empty());
    }

    #[test]
    fn en_passant_exposing_king_on_rank_is_illegal() {
        // Capturing d5xe6 would open the fifth rank to the rook on h5.
        let game = GameState::from_fen(SAMPLE_FENS[4]).expect("FEN should parse");
        let moves = generate_legal_moves(&game, 35);
        assert!(moves.iter().all(|mv| !mv.is_en_passant));
        assert!(moves.iter().any(|mv| mv.to == 43));
    }

    #[test]
    fn side_not_to_move_has_no_legal_moves() {
        let game = GameState::new_game();
        assert!(generate_legal_moves(&game, 52).is_empty());
        assert!(has_legal_move(&game));
    }

    #[test]
    fn check_must_be_answered() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/r3K2R w K - 0 1").expect("FEN should parse");
        let moves = generate_all_legal_moves(&game);
        assert!(moves.iter().all(|mv| mv.moved_piece == PieceKind::King || mv.to == 0));
        assert!(moves.iter().all(|mv| mv.castle_side.is_none()));
    }
}
