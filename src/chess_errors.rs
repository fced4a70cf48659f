//! Errors used throughout the rules core.
//!
//! `ChessErrors` is the single error type returned by parsing, move
//! application and game-end evaluation. Every failure is reported to the
//! immediate caller; nothing here is fatal to a process and a failed call
//! never leaves a `GameState` half-updated.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

/// Unified error type for the crate.
///
/// - Parsing variants (`InvalidFen`, `InvalidAlgebraic`,
///   `InvalidLongAlgebraic`) describe bad caller input and are safe to show
///   to end users.
/// - Move variants (`IllegalMove`, `NoPieceOnSquare`, `InvalidPromotion`)
///   reject a proposal without touching the position.
/// - `MissingKing` means the position violates the one-king-per-side
///   precondition of game-end evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The FEN text could not be parsed.
    ///
    /// Payload: a description of the first offending field.
    InvalidFen(String),

    /// A square name outside `a1..h8`.
    InvalidAlgebraic(String),

    /// Malformed or unresolvable long algebraic move text such as `e2e4`.
    InvalidLongAlgebraic(String),

    /// The proposed move is not in the legal set for its origin square.
    IllegalMove { from: Square, to: Square },

    /// A move was requested from an empty square.
    NoPieceOnSquare(Square),

    /// Promotion to a pawn or king was requested.
    InvalidPromotion(PieceKind),

    /// The position has no king for this color.
    MissingKing(Color),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::InvalidAlgebraic(text) => write!(f, "invalid algebraic square: {text}"),
            ChessErrors::InvalidLongAlgebraic(text) => {
                write!(f, "invalid long algebraic move: {text}")
            }
            ChessErrors::IllegalMove { from, to } => write!(
                f,
                "illegal move {}{}",
                display_square(*from),
                display_square(*to)
            ),
            ChessErrors::NoPieceOnSquare(square) => {
                write!(f, "no piece on {}", display_square(*square))
            }
            ChessErrors::InvalidPromotion(kind) => write!(f, "cannot promote to {kind:?}"),
            ChessErrors::MissingKing(color) => write!(f, "no {color:?} king on the board"),
        }
    }
}

impl Error for ChessErrors {}

fn display_square(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|_| format!("#{square}"))
}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::chess_types::Color;

    #[test]
    fn display_uses_algebraic_squares() {
        let err = ChessErrors::IllegalMove { from: 12, to: 36 };
        assert_eq!(err.to_string(), "illegal move e2e5");
        assert_eq!(ChessErrors::NoPieceOnSquare(99).to_string(), "no piece on #99");
        assert_eq!(
            ChessErrors::MissingKing(Color::Black).to_string(),
            "no Black king on the board"
        );
    }
}
