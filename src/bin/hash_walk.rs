//! Apply a line of long-algebraic moves, print each ply's hash, then unwind.
//!
//! Usage:
//! `cargo run --bin hash_walk -- e2e4 e7e5 g1f3`
//! `cargo run --bin hash_walk -- --fen "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1" e1g1`
//!
//! Log output is controlled with `RUST_LOG`.

use log::info;

use plum_board::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_board::utils::fen_parser::parse_fen_with_config;
use plum_board::utils::long_algebraic::long_algebraic_to_move;
use plum_board::PositionConfig;

fn parse_args() -> (String, Vec<String>) {
    let mut fen = STARTING_POSITION_FEN.to_owned();
    let mut moves = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--fen" {
            if let Some(value) = args.next() {
                fen = value;
            }
        } else {
            moves.push(arg);
        }
    }
    (fen, moves)
}

fn main() -> Result<(), String> {
    env_logger::init();

    let (fen, moves) = parse_args();
    let config = PositionConfig::from_env();
    let mut position = parse_fen_with_config(&fen, &config).map_err(|e| e.to_string())?;
    let root_hash = position.hash();

    println!("ply 0: {:016x} {}", root_hash, position.to_fen());
    for text in &moves {
        let mv = long_algebraic_to_move(text, &position).map_err(|e| format!("{text}: {e}"))?;
        position.make_move(mv);
        println!(
            "ply {}: {:016x} {}",
            position.ply(),
            position.hash(),
            position.to_fen()
        );
    }

    position
        .check_consistency()
        .map_err(|e| format!("after {} moves: {e}", moves.len()))?;

    while position.history_len() > 0 {
        position.undo_move();
    }

    if position.hash() != root_hash {
        return Err(format!(
            "root hash {root_hash:016x} not restored, got {:016x}",
            position.hash()
        ));
    }
    info!("unwound {} moves back to {root_hash:016x}", moves.len());
    println!("unwound to {:016x}", position.hash());
    Ok(())
}
