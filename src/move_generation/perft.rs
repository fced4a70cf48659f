//! Perft node counting.
//!
//! Walks the legal move tree to a fixed depth and tallies leaf statistics.
//! Promotion moves are expanded into one leaf per promotion choice so totals
//! line up with published perft tables.

use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{evaluate_game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in expand_promotions(generator.generate_legal_moves(game_state)?, game_state)? {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

/// Per-root-move node counts, handy for diffing against another engine.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<Vec<(GeneratedMove, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in expand_promotions(generator.generate_legal_moves(game_state)?, game_state)? {
        let mut counts = PerftCounts::default();
        perft_recurse(generator, &mv, depth, 1, &mut counts)?;
        out.push((mv, counts.nodes));
    }

    Ok(out)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        counts.merge(leaf_counts(mv)?);
        return Ok(());
    }

    let children = expand_promotions(generator.generate_legal_moves(&mv.game_after_move)?, &mv.game_after_move)?;
    for child in children {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}

fn leaf_counts(mv: &GeneratedMove) -> MoveGenResult<PerftCounts> {
    let chess_move = &mv.chess_move;
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if chess_move.is_capture {
        counts.captures = 1;
    }
    if chess_move.is_en_passant {
        counts.en_passant = 1;
    }
    if chess_move.castle_side.is_some() {
        counts.castles = 1;
    }
    if chess_move.is_promotion {
        counts.promotions = 1;
    }

    match evaluate_game_status(&mv.game_after_move)? {
        GameStatus::Check => counts.checks = 1,
        GameStatus::Checkmate => {
            counts.checks = 1;
            counts.checkmates = 1;
        }
        GameStatus::Ongoing | GameStatus::Stalemate => {}
    }

    Ok(counts)
}

/// Replace each generated promotion with one resolved move per choice.
fn expand_promotions(moves: Vec<GeneratedMove>, parent: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        if !mv.chess_move.is_promotion || mv.chess_move.promotion.is_some() {
            out.push(mv);
            continue;
        }
        for piece in PROMOTION_CHOICES {
            let chess_move = mv.chess_move.with_promotion(piece);
            out.push(GeneratedMove {
                chess_move,
                game_after_move: apply_move_unchecked(parent, &chess_move)?,
            });
        }
    }
    Ok(out)
}
