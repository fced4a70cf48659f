//! Value types shared by every layer of the rules core.
//!
//! Squares are plain indices (`0 == a1`, `7 == h1`, `63 == h8`), pieces are
//! small `Copy` values, and castling rights are a four-bit mask.

pub use crate::game_state::game_state::GameState;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase letter used by FEN and long algebraic promotion suffixes.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::to_char`].
    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Immutable colored piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { kind, color }
    }
}

/// Which wing a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Board square index (`0..=63`).
pub type Square = u8;

/// Mailbox board, one optional piece per square.
pub type Board = [Option<Piece>; 64];

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

/// Four independent castling flags packed into one byte.
pub type CastlingRights = u8;

#[inline]
pub const fn castling_right(color: Color, side: CastleSide) -> CastlingRights {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => CASTLE_WHITE_KINGSIDE,
        (Color::White, CastleSide::Queenside) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_QUEENSIDE,
    }
}

#[inline]
pub const fn square_file(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_rank(square: Square) -> u8 {
    square / 8
}

/// Square at `(file, rank)`, or `None` when either coordinate is off the board.
#[inline]
pub const fn square_at(file: i8, rank: i8) -> Option<Square> {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return None;
    }
    Some((rank * 8 + file) as Square)
}

/// Step from `square` by a file/rank delta.
///
/// The deltas are applied to file and rank separately, so a step can never
/// wrap from the h-file onto the a-file of the next rank.
#[inline]
pub const fn offset_square(square: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    square_at(
        square_file(square) as i8 + file_delta,
        square_rank(square) as i8 + rank_delta,
    )
}
