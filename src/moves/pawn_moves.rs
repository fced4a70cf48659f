//! Pawn geometry: direction of travel, special ranks and capture diagonals.

use crate::game_state::chess_types::{offset_square, square_rank, Color, Square};

/// Rank delta of one pawn step for `color`.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Rank from which a double step is allowed.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Far rank on which a pawn promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn is_promotion_square(color: Color, square: Square) -> bool {
    square_rank(square) == promotion_rank(color)
}

/// Diagonal squares a pawn of `color` on `square` attacks, queen-side first.
#[inline]
pub fn pawn_capture_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let forward = pawn_forward(color);
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |file_delta| offset_square(square, file_delta, forward))
}
