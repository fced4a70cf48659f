//! Long algebraic move text (`e2e4`, `e7e8n`).
//!
//! Parsing resolves the text against the legal moves of the given position,
//! so the returned `ChessMove` carries the correct capture/castle/en passant
//! flags and can be handed straight to `apply_move`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::DEFAULT_PROMOTION;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn chess_move_to_long_algebraic(chess_move: &ChessMove) -> Result<String, ChessErrors> {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(chess_move.from)?);
    out.push_str(&square_to_algebraic(chess_move.to)?);

    if chess_move.is_promotion {
        out.push(chess_move.promotion.unwrap_or(DEFAULT_PROMOTION).to_char());
    }

    Ok(out)
}

pub fn long_algebraic_to_chess_move(
    long_algebraic: &str,
    game_state: &GameState,
) -> Result<ChessMove, ChessErrors> {
    let invalid = || ChessErrors::InvalidLongAlgebraic(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| invalid())?;
    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_char(ch) {
            Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
                Some(kind)
            }
            _ => return Err(invalid()),
        },
    };

    let candidate = generate_legal_moves(game_state, from)
        .into_iter()
        .find(|mv| mv.to == to)
        .ok_or(ChessErrors::IllegalMove { from, to })?;

    match promotion {
        Some(kind) if candidate.is_promotion => Ok(candidate.with_promotion(kind)),
        Some(_) => Err(invalid()),
        None => Ok(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_flags_from_position() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = long_algebraic_to_chess_move("e1c1", &game).expect("castle should resolve");
        assert_eq!(castle.castle_side, Some(CastleSide::Queenside));

        let capture = long_algebraic_to_chess_move("a1a8", &game).expect("capture should resolve");
        assert!(capture.is_capture);
        assert_eq!(capture.captured_piece, Some(PieceKind::Rook));
    }

    #[test]
    fn promotion_suffix_is_optional() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let default = long_algebraic_to_chess_move("a7a8", &game).expect("should resolve");
        assert!(default.is_promotion);
        assert_eq!(default.promotion, None);
        assert_eq!(chess_move_to_long_algebraic(&default).expect("should format"), "a7a8q");

        let rook = long_algebraic_to_chess_move("a7a8r", &game).expect("should resolve");
        assert_eq!(rook.promotion, Some(PieceKind::Rook));
        assert_eq!(chess_move_to_long_algebraic(&rook).expect("should format"), "a7a8r");
    }

    #[test]
    fn rejects_malformed_and_illegal_text() {
        let game = GameState::new_game();
        assert!(matches!(
            long_algebraic_to_chess_move("e2", &game),
            Err(ChessErrors::InvalidLongAlgebraic(_))
        ));
        assert!(matches!(
            long_algebraic_to_chess_move("e2e4k", &game),
            Err(ChessErrors::InvalidLongAlgebraic(_))
        ));
        assert!(matches!(
            long_algebraic_to_chess_move("e2e4q", &game),
            Err(ChessErrors::InvalidLongAlgebraic(_))
        ));
        assert_eq!(
            long_algebraic_to_chess_move("e2e5", &game),
            Err(ChessErrors::IllegalMove { from: 12, to: 36 })
        );
        assert_eq!(
            chess_move_to_long_algebraic(
                &long_algebraic_to_chess_move("g1f3", &game).expect("knight move")
            )
            .expect("should format"),
            "g1f3"
        );
    }
}
