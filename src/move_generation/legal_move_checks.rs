//! Attack oracle.
//!
//! A square is attacked by a color when one of that color's pieces could move
//! onto it: pawn diagonals (occupied or not), knight and king offsets, and
//! slider rays up to the first blocker. The reach is built from the same
//! movement patterns as pseudo-legal generation but never includes castling,
//! so the oracle can be called from castling generation without recursing.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_capture_targets;
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let king = Piece::new(color, PieceKind::King);
    (0..64u8).find(|&sq| game_state.piece_on(sq) == Some(king))
}

/// Squares the piece on `from` could move onto, ignoring king safety.
pub fn attack_targets(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = game_state.piece_on(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => out.extend(pawn_capture_targets(piece.color, from)),
        PieceKind::Knight => out.extend(knight_targets(from)),
        PieceKind::Bishop => bishop_targets(&game_state.board, from, out),
        PieceKind::Rook => rook_targets(&game_state.board, from, out),
        PieceKind::Queen => queen_targets(&game_state.board, from, out),
        PieceKind::King => out.extend(king_targets(from)),
    }
}

/// True if any piece of the opponent of `color` reaches `target`.
pub fn is_attacked(game_state: &GameState, color: Color, target: Square) -> bool {
    let attacker = color.opposite();
    let mut targets = Vec::with_capacity(32);

    for from in game_state.squares_of(attacker) {
        targets.clear();
        attack_targets(game_state, from, &mut targets);
        if targets.contains(&target) {
            return true;
        }
    }

    false
}

/// True if `color`'s king is attacked. A side without a king is never in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_attacked(game_state, color, king_sq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn starting_position_attacks() {
        let game = GameState::new_game();
        // Third rank is covered by white pawns and knights.
        for name in ["a3", "c3", "f3", "h3", "e3"] {
            assert!(is_attacked(&game, Color::Black, sq(name)), "{name}");
        }
        assert!(!is_attacked(&game, Color::Black, sq("e4")));
        assert!(!is_king_in_check(&game, Color::White));
        assert!(!is_king_in_check(&game, Color::Black));
    }

    #[test]
    fn pawn_diagonals_count_on_empty_squares_but_pushes_do_not() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1").expect("FEN should parse");
        assert!(is_attacked(&game, Color::Black, sq("d3")));
        assert!(is_attacked(&game, Color::Black, sq("f3")));
        assert!(!is_attacked(&game, Color::Black, sq("e3")));
    }

    #[test]
    fn sliders_are_blocked() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R2P3K b - - 0 1").expect("FEN should parse");
        assert!(is_attacked(&game, Color::Black, sq("c1")));
        assert!(is_attacked(&game, Color::Black, sq("d1")));
        assert!(!is_attacked(&game, Color::Black, sq("e1")));
    }

    #[test]
    fn king_square_finds_each_king() {
        let game = GameState::new_game();
        assert_eq!(king_square(&game, Color::White), Some(4));
        assert_eq!(king_square(&game, Color::Black), Some(60));
        assert_eq!(king_square(&GameState::new_empty(), Color::White), None);
    }

    #[test]
    fn queen_gives_check_along_diagonal() {
        let game = GameState::from_fen("8/8/8/8/8/8/6k1/4K2Q b - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Color::Black));
        assert!(!is_king_in_check(&game, Color::White));
    }
}
