//! King step pattern.

use crate::game_state::chess_types::{offset_square, Square};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .iter()
        .filter_map(move |&(file_delta, rank_delta)| offset_square(square, file_delta, rank_delta))
}
