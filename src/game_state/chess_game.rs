//! Caller-facing game session.
//!
//! `ChessGame` holds the current position and replaces it wholesale on every
//! accepted move or FEN import. Rejected input leaves it untouched.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{evaluate_game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{generate_all_legal_moves, generate_legal_moves};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::long_algebraic::long_algebraic_to_chess_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessGame {
    current: GameState,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new_game()
    }
}

impl ChessGame {
    pub fn new_game() -> Self {
        Self {
            current: GameState::new_game(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Ok(Self {
            current: GameState::from_fen(fen)?,
        })
    }

    /// Replace the position with `fen`; on error the old position is kept.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), ChessErrors> {
        self.current = GameState::from_fen(fen)?;
        Ok(())
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.current
    }

    pub fn legal_moves_from(&self, square: Square) -> Vec<ChessMove> {
        generate_legal_moves(&self.current, square)
    }

    pub fn all_legal_moves(&self) -> Vec<ChessMove> {
        generate_all_legal_moves(&self.current)
    }

    /// Apply a move chosen from the legal set. Returns the status of the new
    /// position.
    pub fn play_move(&mut self, chess_move: &ChessMove) -> Result<GameStatus, ChessErrors> {
        let next = apply_move(&self.current, chess_move)?;
        let status = evaluate_game_status(&next)?;
        self.current = next;
        Ok(status)
    }

    pub fn play_long_algebraic(&mut self, long_algebraic: &str) -> Result<GameStatus, ChessErrors> {
        let chess_move = long_algebraic_to_chess_move(long_algebraic, &self.current)?;
        self.play_move(&chess_move)
    }

    pub fn status(&self) -> Result<GameStatus, ChessErrors> {
        evaluate_game_status(&self.current)
    }

    pub fn fen(&self) -> String {
        self.current.get_fen()
    }
}
