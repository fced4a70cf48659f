//! Knight jump pattern.

use crate::game_state::chess_types::{offset_square, Square};

/// `(file, rank)` deltas, clockwise from the upper-right jump.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// On-board knight destinations from `square`, in offset order.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(file_delta, rank_delta)| offset_square(square, file_delta, rank_delta))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;

    #[test]
    fn knight_targets_from_d4_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!(knight_targets(d4).count(), 8);
    }

    #[test]
    fn knight_targets_from_h1_do_not_wrap() {
        let h1 = 7u8;
        let targets: Vec<u8> = knight_targets(h1).collect();
        // g3 and f2 only; index arithmetic alone would also hit a2/a3.
        assert_eq!(targets, vec![13, 22]);
    }
}
