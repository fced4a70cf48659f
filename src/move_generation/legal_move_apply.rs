//! Move application.
//!
//! `apply_move` is the validated entry point: it rejects anything outside the
//! legal set for the origin square and otherwise returns a new `GameState`.
//! The input is never modified, so a rejected move leaves the caller's
//! position exactly as it was.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{castling_layout, castling_right_for_rook_home, DEFAULT_PROMOTION};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::{is_promotion_square, pawn_forward};

/// Apply `mv` after checking it against the legal moves from `mv.from`.
pub fn apply_move(game_state: &GameState, mv: &ChessMove) -> Result<GameState, ChessErrors> {
    let mover = game_state
        .piece_on(mv.from)
        .ok_or(ChessErrors::NoPieceOnSquare(mv.from))?;

    if let Some(promotion) = mv.promotion {
        if matches!(promotion, PieceKind::Pawn | PieceKind::King) {
            return Err(ChessErrors::InvalidPromotion(promotion));
        }
        if !mv.is_promotion {
            return Err(illegal(mv));
        }
    }

    let is_legal = generate_legal_moves(game_state, mv.from)
        .iter()
        .any(|legal| legal.same_action(mv));
    if !is_legal {
        return Err(illegal(mv));
    }

    Ok(make_move(game_state, mv, mover))
}

/// Apply `mv` without consulting the legal-move set.
///
/// Used for legality simulation and by callers that already hold a move from
/// the generator. Only the origin square is checked.
pub fn apply_move_unchecked(game_state: &GameState, mv: &ChessMove) -> Result<GameState, ChessErrors> {
    let mover = game_state
        .piece_on(mv.from)
        .ok_or(ChessErrors::NoPieceOnSquare(mv.from))?;
    Ok(make_move(game_state, mv, mover))
}

pub(crate) fn make_move(game_state: &GameState, mv: &ChessMove, mover: Piece) -> GameState {
    let mut next = *game_state;
    let color = mover.color;
    let forward = pawn_forward(color);
    let target_was_occupied = next.board[mv.to as usize].is_some();

    // Move (and possibly promote) the piece.
    next.board[mv.from as usize] = None;
    let placed = if mover.kind == PieceKind::Pawn && is_promotion_square(color, mv.to) {
        Piece::new(color, mv.promotion.unwrap_or(DEFAULT_PROMOTION))
    } else {
        mover
    };
    next.board[mv.to as usize] = Some(placed);

    // En passant removes the pawn behind the destination, not on it.
    if mv.is_en_passant {
        if let Some(captured_sq) = offset_square(mv.to, 0, -forward) {
            next.board[captured_sq as usize] = None;
        }
    }

    if let Some(side) = mv.castle_side {
        let layout = castling_layout(color, side);
        let rook = next.board[layout.rook_from as usize].take();
        next.board[layout.rook_to as usize] = rook;
    }

    next.en_passant_square = if mv.is_double_step {
        offset_square(mv.from, 0, forward)
    } else {
        None
    };

    update_castling_rights(&mut next, color, mover.kind, mv);

    if mover.kind == PieceKind::Pawn || mv.is_capture || target_was_occupied {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }

    next.side_to_move = color.opposite();
    if next.side_to_move == Color::White {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next
}

/// Rights only ever get cleared here, never granted.
fn update_castling_rights(
    game_state: &mut GameState,
    moving_color: Color,
    moved_piece: PieceKind,
    mv: &ChessMove,
) {
    if moved_piece == PieceKind::King {
        game_state.castling_rights &= !(castling_right(moving_color, CastleSide::Kingside)
            | castling_right(moving_color, CastleSide::Queenside));
    }

    // Leaving a rook home square, or capturing on one.
    if let Some(right) = castling_right_for_rook_home(mv.from) {
        game_state.castling_rights &= !right;
    }
    if mv.is_capture {
        if let Some(right) = castling_right_for_rook_home(mv.to) {
            game_state.castling_rights &= !right;
        }
    }
}

#[inline]
fn illegal(mv: &ChessMove) -> ChessErrors {
    ChessErrors::IllegalMove {
        from: mv.from,
        to: mv.to,
    }
}
