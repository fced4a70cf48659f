//! Canonical chess-rule constants.
//!
//! Stores the standard starting position, promotion choices and the fixed
//! king/rook geometry that castling generation and application share.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Pieces a pawn may become, in the order perft and the front-end list them.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Piece used when a promoting move arrives without an explicit choice.
pub const DEFAULT_PROMOTION: PieceKind = PieceKind::Queen;

/// Fixed squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLayout {
    pub color: Color,
    pub side: CastleSide,
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook.
    pub empty_squares: &'static [Square],
    /// King origin, transit and destination; none may be attacked.
    pub king_path: &'static [Square],
}

pub const CASTLING_LAYOUTS: [CastlingLayout; 4] = [
    CastlingLayout {
        color: Color::White,
        side: CastleSide::Kingside,
        right: CASTLE_WHITE_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        empty_squares: &[5, 6],
        king_path: &[4, 5, 6],
    },
    CastlingLayout {
        color: Color::White,
        side: CastleSide::Queenside,
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        empty_squares: &[1, 2, 3],
        king_path: &[4, 3, 2],
    },
    CastlingLayout {
        color: Color::Black,
        side: CastleSide::Kingside,
        right: CASTLE_BLACK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        empty_squares: &[61, 62],
        king_path: &[60, 61, 62],
    },
    CastlingLayout {
        color: Color::Black,
        side: CastleSide::Queenside,
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        empty_squares: &[57, 58, 59],
        king_path: &[60, 59, 58],
    },
];

#[inline]
pub fn castling_layout(color: Color, side: CastleSide) -> &'static CastlingLayout {
    let offset = match side {
        CastleSide::Kingside => 0,
        CastleSide::Queenside => 1,
    };
    &CASTLING_LAYOUTS[color.index() * 2 + offset]
}

/// Castling rights tied to a rook home square, if `square` is one.
#[inline]
pub fn castling_right_for_rook_home(square: Square) -> Option<CastlingRights> {
    CASTLING_LAYOUTS
        .iter()
        .find(|layout| layout.rook_from == square)
        .map(|layout| layout.right)
}
