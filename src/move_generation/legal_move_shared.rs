use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

#[inline]
pub fn enemy_piece_on(game_state: &GameState, mover: Color, square: Square) -> Option<PieceKind> {
    match game_state.piece_on(square) {
        Some(piece) if piece.color != mover => Some(piece.kind),
        _ => None,
    }
}

/// Emit a step or jump onto `to`: quiet if empty, capture if enemy, nothing if
/// occupied by a friendly piece.
#[inline]
pub fn push_step_or_capture(
    game_state: &GameState,
    from: Square,
    to: Square,
    mover: Piece,
    out: &mut Vec<ChessMove>,
) {
    match game_state.piece_on(to) {
        None => out.push(ChessMove::quiet(from, to, mover.kind)),
        Some(target) if target.color != mover.color => {
            out.push(ChessMove::capture(from, to, mover.kind, target.kind))
        }
        Some(_) => {}
    }
}

/// Turn ray/offset targets into moves, preserving target order.
#[inline]
pub fn push_targets(
    game_state: &GameState,
    from: Square,
    mover: Piece,
    targets: impl IntoIterator<Item = Square>,
    out: &mut Vec<ChessMove>,
) {
    for to in targets {
        push_step_or_capture(game_state, from, to, mover, out);
    }
}
