//! Move proposals produced by generation and consumed by application.
//!
//! A `ChessMove` carries everything the applier needs without re-deriving it
//! from the board: origin, destination, the moving piece and the special-move
//! flags. It is pseudo-legal until it has passed the legality filter.

use crate::game_state::chess_types::{CastleSide, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub moved_piece: PieceKind,
    pub captured_piece: Option<PieceKind>,
    pub is_capture: bool,
    pub is_en_passant: bool,
    pub is_double_step: bool,
    pub castle_side: Option<CastleSide>,
    /// Set when a pawn lands on its far rank.
    pub is_promotion: bool,
    /// Caller-chosen promotion piece; `None` means queen.
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn quiet(from: Square, to: Square, moved_piece: PieceKind) -> Self {
        Self {
            from,
            to,
            moved_piece,
            captured_piece: None,
            is_capture: false,
            is_en_passant: false,
            is_double_step: false,
            castle_side: None,
            is_promotion: false,
            promotion: None,
        }
    }

    #[inline]
    pub const fn capture(from: Square, to: Square, moved_piece: PieceKind, captured: PieceKind) -> Self {
        let mut mv = Self::quiet(from, to, moved_piece);
        mv.captured_piece = Some(captured);
        mv.is_capture = true;
        mv
    }

    #[inline]
    pub const fn double_step(from: Square, to: Square) -> Self {
        let mut mv = Self::quiet(from, to, PieceKind::Pawn);
        mv.is_double_step = true;
        mv
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        let mut mv = Self::capture(from, to, PieceKind::Pawn, PieceKind::Pawn);
        mv.is_en_passant = true;
        mv
    }

    #[inline]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        let mut mv = Self::quiet(from, to, PieceKind::King);
        mv.castle_side = Some(side);
        mv
    }

    #[inline]
    pub const fn promoting(mut self) -> Self {
        self.is_promotion = true;
        self
    }

    /// Same move with the promotion piece resolved by the caller.
    #[inline]
    pub const fn with_promotion(mut self, piece: PieceKind) -> Self {
        self.promotion = Some(piece);
        self
    }

    /// True when both moves describe the same action, ignoring the promotion
    /// choice (which is supplied by the caller, not by generation).
    #[inline]
    pub fn same_action(&self, other: &ChessMove) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.moved_piece == other.moved_piece
            && self.captured_piece == other.captured_piece
            && self.is_capture == other.is_capture
            && self.is_en_passant == other.is_en_passant
            && self.is_double_step == other.is_double_step
            && self.castle_side == other.castle_side
            && self.is_promotion == other.is_promotion
    }
}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn en_passant_is_a_pawn_capture() {
        let mv = ChessMove::en_passant(36, 43);
        assert!(mv.is_capture);
        assert!(mv.is_en_passant);
        assert_eq!(mv.captured_piece, Some(PieceKind::Pawn));
    }

    #[test]
    fn same_action_ignores_promotion_choice() {
        let generated = ChessMove::quiet(52, 60, PieceKind::Pawn).promoting();
        let chosen = generated.with_promotion(PieceKind::Knight);
        assert!(generated.same_action(&chosen));
        assert_ne!(generated, chosen);
        assert!(!generated.same_action(&ChessMove::quiet(52, 60, PieceKind::Rook)));
    }
}
