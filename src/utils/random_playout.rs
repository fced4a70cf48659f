//! Seeded random self-play.
//!
//! Plays uniformly random legal moves from a start position until the game
//! ends or a ply cap is hit. Useful as a smoke test of the whole
//! generate/apply/evaluate cycle and as a driver for the `random_playout` bin.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{evaluate_game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;
use crate::utils::long_algebraic::chess_move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Color },
    Stalemate,
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub start_fen: Option<String>,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            start_fen: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
}

pub fn run_random_playout(config: &PlayoutConfig, seed: u64) -> Result<PlayoutResult, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game_state = match &config.start_fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };
    let mut played_moves_lan = Vec::new();

    let outcome = loop {
        match evaluate_game_status(&game_state)? {
            GameStatus::Checkmate => {
                break PlayoutOutcome::Checkmate {
                    winner: game_state.side_to_move.opposite(),
                }
            }
            GameStatus::Stalemate => break PlayoutOutcome::Stalemate,
            GameStatus::Ongoing | GameStatus::Check => {}
        }
        if played_moves_lan.len() >= config.max_plies as usize {
            break PlayoutOutcome::MaxPlies;
        }

        let legal = generate_all_legal_moves(&game_state);
        if legal.is_empty() {
            break PlayoutOutcome::Stalemate;
        }
        let mut chosen = legal[rng.random_range(0..legal.len())];
        if chosen.is_promotion {
            chosen.promotion = Some(PROMOTION_CHOICES[rng.random_range(0..PROMOTION_CHOICES.len())]);
        }

        played_moves_lan.push(chess_move_to_long_algebraic(&chosen)?);
        game_state = apply_move(&game_state, &chosen)?;
    };

    Ok(PlayoutResult {
        outcome,
        final_state: game_state,
        played_moves_lan,
    })
}
