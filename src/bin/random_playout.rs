//! Seeded random self-play runner.
//!
//! Usage:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --games 50 --seed 7 --max-plies 200 --verbose`
//! `cargo run --release --bin random_playout -- --fen 7k/8/6K1/8/8/8/8/Q7 w - - 0 1 --games 3`

use chess_legality::utils::random_playout::{run_random_playout, PlayoutConfig, PlayoutOutcome};
use chess_legality::utils::render_game_state::render_game_state;

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

/// Tokens after `--fen` up to the next `--` flag, joined back into one FEN.
/// The FEN may be passed quoted or as separate words.
fn fen_arg(args: &[String]) -> Option<String> {
    let start = args.iter().position(|a| a == "--fen")? + 1;
    let parts: Vec<&str> = args[start..]
        .iter()
        .take_while(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let games = parse_arg::<u16>("--games", 10);
    let base_seed = parse_arg::<u64>("--seed", 1234);
    let config = PlayoutConfig {
        max_plies: parse_arg::<u16>("--max-plies", 300),
        start_fen: fen_arg(&std::env::args().collect::<Vec<_>>()),
    };

    let mut mates = 0u32;
    let mut stalemates = 0u32;
    let mut capped = 0u32;

    for game_idx in 0..games {
        let seed = base_seed.wrapping_add(game_idx as u64);
        let result = run_random_playout(&config, seed).map_err(|e| e.to_string())?;

        match result.outcome {
            PlayoutOutcome::Checkmate { .. } => mates += 1,
            PlayoutOutcome::Stalemate => stalemates += 1,
            PlayoutOutcome::MaxPlies => capped += 1,
        }

        println!(
            "game {} seed {} plies {} outcome {:?} fen {}",
            game_idx + 1,
            seed,
            result.played_moves_lan.len(),
            result.outcome,
            result.final_state.get_fen()
        );
        if verbose {
            println!("moves {}", result.played_moves_lan.join(" "));
            println!("{}", render_game_state(&result.final_state));
        }
    }

    println!("checkmates {mates} stalemates {stalemates} max_plies {capped}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::fen_arg;

    fn args(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn fen_flag_collects_words_until_next_flag() {
        assert_eq!(
            fen_arg(&args("bin --fen 7k/8/6K1/8/8/8/8/Q7 w - - 0 1 --games 3")),
            Some("7k/8/6K1/8/8/8/8/Q7 w - - 0 1".to_owned())
        );
        let quoted = vec!["bin".to_owned(), "--fen".to_owned(), "4k3/8/8/8/8/8/8/4K3 b - -".to_owned()];
        assert_eq!(fen_arg(&quoted), Some("4k3/8/8/8/8/8/8/4K3 b - -".to_owned()));
        assert_eq!(fen_arg(&args("bin --games 3")), None);
        assert_eq!(fen_arg(&args("bin --fen --games 3")), None);
    }
}
