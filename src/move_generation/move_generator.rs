use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

pub type MoveGenResult<T> = Result<T, ChessErrors>;

/// A legal move together with the position it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub game_after_move: GameState,
}

/// Whole-position legal move source used by perft and the playout driver.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>>;
}
