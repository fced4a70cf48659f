//! FEN-to-GameState parser.
//!
//! Accepts four to six whitespace-separated fields. A missing halfmove clock
//! defaults to 0 and a missing fullmove number to 1.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ChessErrors::InvalidFen(format!(
            "expected at least 4 fields, found {}",
            fields.len()
        )));
    }
    if fields.len() > 6 {
        return Err(ChessErrors::InvalidFen("FEN has extra trailing fields".to_owned()));
    }

    let mut game_state = GameState::new_empty();

    parse_board(fields[0], &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(fields[1])?;
    game_state.castling_rights = parse_castling_rights(fields[2])?;
    game_state.en_passant_square = parse_en_passant_square(fields[3], game_state.side_to_move)?;
    game_state.halfmove_clock = match fields.get(4) {
        Some(text) => parse_counter(text, "halfmove clock")?,
        None => 0,
    };
    game_state.fullmove_number = match fields.get(5) {
        Some(text) => parse_counter(text, "fullmove number")?,
        None => 1,
    };

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFen("board layout must contain 8 ranks".to_owned()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                if file > 8 {
                    return Err(ChessErrors::InvalidFen(format!("rank '{rank_str}' has too many files")));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| ChessErrors::InvalidFen(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(ChessErrors::InvalidFen(format!("rank '{rank_str}' has too many files")));
            }

            game_state.board[board_rank * 8 + file] = Some(piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFen(format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFen(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(ChessErrors::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

/// The target must sit on the square a double step just skipped: rank 6
/// when white is to move, rank 3 when black is.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let invalid = || ChessErrors::InvalidFen(format!("invalid en passant square: {en_passant_part}"));
    let square = algebraic_to_square(en_passant_part).map_err(|_| invalid())?;
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if square_rank(square) != expected_rank {
        return Err(invalid());
    }

    Ok(Some(square))
}

fn parse_counter(text: &str, name: &str) -> Result<u16, ChessErrors> {
    text.parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFen(format!("invalid {name}: {text}")))
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_char(ch).map(|kind| Piece::new(color, kind))
}
