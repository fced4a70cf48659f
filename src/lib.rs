//! Crate root module declarations for the chess legality core.
//!
//! The crate generates pseudo-legal and legal moves, answers attack queries,
//! applies moves as pure position-to-position transitions, and classifies
//! positions as ongoing, check, checkmate or stalemate. FEN import/export,
//! long algebraic notation, perft and a small command front-end sit on top.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_game;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_move_generator;
}

pub mod console {
    pub mod command_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}
