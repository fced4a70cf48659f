//! Chess position snapshot.
//!
//! `GameState` is a plain value: a 64-entry mailbox board plus side to move,
//! castling rights, en passant target and clocks. Generation and the attack
//! oracle only borrow it; the move applier returns a fresh copy.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by the previous ply's double step, capturable this ply only.
    pub en_passant_square: Option<Square>,

    /// Plies since the last pawn move or capture. Tracked, never enforced.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Empty board, white to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        (self.castling_rights & right) != 0
    }

    /// Squares holding a piece of `color`, in ascending index order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        (0..64u8).filter(move |&sq| matches!(self.piece_on(sq), Some(piece) if piece.color == color))
    }
}
