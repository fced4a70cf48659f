//! Game-end classification for the side to move.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{is_attacked, king_square};
use crate::move_generation::legal_move_generator::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Classify `game_state` from the point of view of the side to move.
///
/// Draws by repetition, the fifty-move rule and insufficient material are not
/// detected; `halfmove_clock` is left for the caller to interpret.
pub fn evaluate_game_status(game_state: &GameState) -> Result<GameStatus, ChessErrors> {
    let side = game_state.side_to_move;
    let king_sq = king_square(game_state, side).ok_or(ChessErrors::MissingKing(side))?;
    king_square(game_state, side.opposite()).ok_or(ChessErrors::MissingKing(side.opposite()))?;

    let in_check = is_attacked(game_state, side, king_sq);
    let can_move = has_legal_move(game_state);

    Ok(match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn status(fen: &str) -> GameStatus {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        evaluate_game_status(&game).expect("status should evaluate")
    }

    #[test]
    fn starting_position_is_ongoing() {
        assert_eq!(status("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"), GameStatus::Ongoing);
    }

    #[test]
    fn supported_queen_mates_cornered_king() {
        assert_eq!(status("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1"), GameStatus::Checkmate);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        assert_eq!(
            status("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
            GameStatus::Checkmate
        );
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        assert_eq!(status("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
    }

    #[test]
    fn king_with_escape_squares_is_only_in_check() {
        // Black can take the queen on h1 or step to g3.
        assert_eq!(status("8/8/8/8/8/8/6k1/5K1Q b - - 0 1"), GameStatus::Check);
        // The black king stands next to the white king and can flee to g3.
        assert_eq!(status("8/8/8/8/8/8/7k/5Q1K b - - 0 1"), GameStatus::Check);
    }

    #[test]
    fn missing_king_is_reported() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_eq!(evaluate_game_status(&game), Err(ChessErrors::MissingKing(Color::Black)));
        assert!(GameStatus::Checkmate.is_game_over());
        assert!(!GameStatus::Check.is_game_over());
    }
}
