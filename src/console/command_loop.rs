//! Line-oriented command front-end.
//!
//! Reads one command per line, keeps the current position in a `ChessGame`
//! and writes results as plain text. Errors are reported as `info error ...`
//! lines and never end the loop.
//!
//! Commands:
//! - `position startpos|fen <FEN> [moves <lan>...]`
//! - `moves [square]`
//! - `play <lan>`
//! - `status`, `fen`, `board`
//! - `perft <depth>`, `divide <depth>`
//! - `quit`

use std::io::{self, BufRead, Write};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_game::ChessGame;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::perft::{perft, perft_divide};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::long_algebraic::chess_move_to_long_algebraic;
use crate::utils::render_game_state::render_game_state;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

#[derive(Debug, Default)]
pub struct ConsoleState {
    game: ChessGame,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();

        let result = match cmd {
            "position" => self.handle_position(trimmed),
            "moves" => self.handle_moves(arg, out),
            "play" => self.handle_play(arg, out),
            "status" => self.write_status(out),
            "fen" => writeln!(out, "{}", self.game.fen()).map_err(CommandError::Io),
            "board" => writeln!(out, "{}", render_game_state(self.game.game_state())).map_err(CommandError::Io),
            "perft" => self.handle_perft(arg, out),
            "divide" => self.handle_divide(arg, out),
            "quit" => return Ok(true),
            other => {
                writeln!(out, "info unknown command '{other}'")?;
                Ok(())
            }
        };

        match result {
            Ok(()) => {}
            Err(CommandError::Io(err)) => return Err(err),
            Err(CommandError::Chess(err)) => writeln!(out, "info error {err}")?,
            Err(CommandError::Usage(msg)) => writeln!(out, "info usage {msg}")?,
        }

        Ok(false)
    }

    fn handle_position(&mut self, line: &str) -> Result<(), CommandError> {
        let mut tokens = line.split_whitespace().peekable();
        let _ = tokens.next(); // "position"

        let mut next_game = match tokens.next() {
            Some("startpos") => ChessGame::new_game(),
            Some("fen") => {
                let mut fen_parts = Vec::<&str>::new();
                while let Some(next) = tokens.peek() {
                    if *next == "moves" {
                        break;
                    }
                    fen_parts.extend(tokens.next());
                }
                ChessGame::from_fen(&fen_parts.join(" "))?
            }
            _ => return Err(CommandError::Usage("position startpos|fen <FEN> [moves ...]".to_owned())),
        };

        if tokens.peek().copied() == Some("moves") {
            let _ = tokens.next();
            for lan in tokens {
                next_game.play_long_algebraic(lan)?;
            }
        }

        self.game = next_game;
        Ok(())
    }

    fn handle_moves(&self, square: Option<&str>, out: &mut impl Write) -> Result<(), CommandError> {
        let moves = match square {
            Some(text) => self.game.legal_moves_from(algebraic_to_square(text)?),
            None => self.game.all_legal_moves(),
        };
        writeln!(out, "{}", format_moves(&moves)?).map_err(CommandError::Io)
    }

    fn handle_play(&mut self, lan: Option<&str>, out: &mut impl Write) -> Result<(), CommandError> {
        let lan = lan.ok_or_else(|| CommandError::Usage("play <lan>".to_owned()))?;
        self.game.play_long_algebraic(lan)?;
        self.write_status(out)
    }

    fn write_status(&self, out: &mut impl Write) -> Result<(), CommandError> {
        let status = self.game.status()?;
        writeln!(out, "status {}", format!("{status:?}").to_ascii_lowercase()).map_err(CommandError::Io)
    }

    fn handle_perft(&self, depth: Option<&str>, out: &mut impl Write) -> Result<(), CommandError> {
        let depth = parse_depth(depth)?;
        let counts = perft(&LegalMoveGenerator, self.game.game_state(), depth)?;
        writeln!(
            out,
            "perft depth {} nodes {} captures {} ep {} castles {} promotions {} checks {} mates {}",
            depth,
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates
        )
        .map_err(CommandError::Io)
    }

    fn handle_divide(&self, depth: Option<&str>, out: &mut impl Write) -> Result<(), CommandError> {
        let depth = parse_depth(depth)?;
        let divided = perft_divide(&LegalMoveGenerator, self.game.game_state(), depth)?;
        let mut total = 0usize;
        for (generated, nodes) in divided {
            writeln!(out, "{}: {}", chess_move_to_long_algebraic(&generated.chess_move)?, nodes)?;
            total += nodes;
        }
        writeln!(out, "total {total}").map_err(CommandError::Io)
    }
}

#[derive(Debug)]
enum CommandError {
    Io(io::Error),
    Chess(ChessErrors),
    Usage(String),
}

impl From<ChessErrors> for CommandError {
    fn from(err: ChessErrors) -> Self {
        CommandError::Chess(err)
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Io(err)
    }
}

fn parse_depth(depth: Option<&str>) -> Result<u8, CommandError> {
    depth
        .and_then(|text| text.parse::<u8>().ok())
        .ok_or_else(|| CommandError::Usage("perft|divide <depth>".to_owned()))
}

fn format_moves(moves: &[ChessMove]) -> Result<String, ChessErrors> {
    let mut text = Vec::with_capacity(moves.len());
    for mv in moves {
        text.push(chess_move_to_long_algebraic(mv)?);
    }
    Ok(format!("moves {}", text.join(" ")).trim_end().to_owned())
}

#[cfg(test)]
mod tests {
    use super::ConsoleState;

    fn run(console: &mut ConsoleState, line: &str) -> String {
        let mut out = Vec::<u8>::new();
        let quit = console.handle_command(line, &mut out).expect("writing to a Vec cannot fail");
        assert!(!quit);
        String::from_utf8(out).expect("output is UTF-8")
    }

    #[test]
    fn position_with_moves_then_query() {
        let mut console = ConsoleState::new();
        assert_eq!(run(&mut console, "position startpos moves e2e4 e7e5"), "");
        assert_eq!(
            run(&mut console, "fen"),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2\n"
        );
        assert_eq!(run(&mut console, "moves g1"), "moves g1h3 g1e2 g1f3\n");
    }

    #[test]
    fn play_reports_status_and_errors() {
        let mut console = ConsoleState::new();
        run(&mut console, "position fen 7k/8/6K1/8/8/8/8/Q7 w - - 0 1");
        assert_eq!(run(&mut console, "play a1a8"), "status checkmate\n");
        assert_eq!(run(&mut console, "play h8g8"), "info error illegal move h8g8\n");
        assert!(run(&mut console, "position fen 8/8 w").starts_with("info error invalid FEN"));
        // The failed import kept the mated position.
        assert_eq!(run(&mut console, "status"), "status checkmate\n");
    }

    #[test]
    fn perft_and_quit() {
        let mut console = ConsoleState::new();
        assert!(run(&mut console, "perft 2").starts_with("perft depth 2 nodes 400 "));
        assert!(run(&mut console, "divide 1").ends_with("total 20\n"));
        assert_eq!(run(&mut console, "perft"), "info usage perft|divide <depth>\n");

        let mut out = Vec::<u8>::new();
        assert!(console.handle_command("quit", &mut out).expect("quit"));
    }
}
