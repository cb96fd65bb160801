//! Zobrist hashing support for fast position identity.
//!
//! One process-wide table holds a key per (square, piece), per castling-rights
//! value, per en-passant file and per side to move. The table is built once
//! from a seeded generator, so a given seed yields the same keys on every run,
//! and is read-only afterwards.

use std::sync::OnceLock;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;

pub const DEFAULT_ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    seed: u64,
    piece_square: [[u64; SQUARE_COUNT]; PIECE_VARIANTS],
    castling: [u64; 16],
    en_passant_file: [u64; 8],
    side_to_move: [u64; 2],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(|| build_tables(DEFAULT_ZOBRIST_SEED))
}

fn build_tables(seed: u64) -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut piece_square = [[0u64; SQUARE_COUNT]; PIECE_VARIANTS];
    for piece in &mut piece_square {
        for key in piece.iter_mut() {
            *key = rng.random();
        }
    }

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.random();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random();
    }

    let side_to_move = [rng.random(), rng.random()];

    debug!("zobrist tables initialised with seed {seed:#018x}");

    ZobristTables {
        seed,
        piece_square,
        castling,
        en_passant_file,
        side_to_move,
    }
}

/// Build the key table with the default seed. Later calls are no-ops.
pub fn init_hash() {
    init_hash_with_seed(DEFAULT_ZOBRIST_SEED);
}

/// Build the key table with `seed`.
///
/// # Returns
///
/// `true` if this call built the table. When the table already exists it is
/// left untouched; a differing seed is reported at `warn` level.
pub fn init_hash_with_seed(seed: u64) -> bool {
    let mut built = false;
    let tables = TABLES.get_or_init(|| {
        built = true;
        build_tables(seed)
    });
    if !built && tables.seed != seed {
        warn!(
            "zobrist tables already built with seed {:#018x}; ignoring seed {seed:#018x}",
            tables.seed
        );
    }
    built
}

/// Seed the live table was built from.
pub fn active_seed() -> u64 {
    tables().seed
}

/// Key for `piece` standing on `square`.
#[inline]
pub fn piece_square_key(square: Square, piece: Piece) -> u64 {
    tables().piece_square[piece.index()][square as usize]
}

/// Key for a castling-rights value (`0..=15`).
#[inline]
pub fn castling_key(rights: CastlingRights) -> u64 {
    tables().castling[rights.bits() as usize]
}

/// Key for an en-passant file (`0..=7`).
#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[(file & 7) as usize]
}

/// Key for the side to move.
#[inline]
pub fn side_key(color: Color) -> u64 {
    tables().side_to_move[color.index()]
}

/// Recompute the piece-placement component from the bitboards.
pub fn compute_board_hash(position: &Position) -> u64 {
    let mut key = 0u64;
    for piece in Piece::ALL {
        let mut bb = position.board(piece);
        while bb != 0 {
            let sq = bb.trailing_zeros() as Square;
            key ^= piece_square_key(sq, piece);
            bb &= bb - 1;
        }
    }
    key
}

/// Recompute the full position key from scratch.
pub fn compute_hash(position: &Position) -> u64 {
    compute_board_hash(position)
        ^ en_passant_file_key(position.en_passant_square().map_or(0, file_of))
        ^ side_key(position.side_to_move())
        ^ castling_key(position.castling_rights())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_stable_across_calls() {
        init_hash();
        assert_eq!(
            piece_square_key(12, Piece::LightPawn),
            piece_square_key(12, Piece::LightPawn)
        );
        assert_eq!(side_key(Color::Dark), side_key(Color::Dark));
        assert_eq!(
            castling_key(CastlingRights::ALL),
            castling_key(CastlingRights::ALL)
        );
    }

    #[test]
    fn second_init_does_not_rebuild() {
        init_hash();
        assert!(!init_hash_with_seed(active_seed()));
        assert!(!init_hash_with_seed(active_seed() ^ 1));
    }

    #[test]
    fn keys_are_distinct() {
        let mut seen = HashSet::new();
        for piece in Piece::ALL {
            for sq in 0..64u8 {
                assert!(seen.insert(piece_square_key(sq, piece)));
            }
        }
        for bits in 0..16u8 {
            assert!(seen.insert(castling_key(CastlingRights::from_bits(bits))));
        }
        for file in 0..8u8 {
            assert!(seen.insert(en_passant_file_key(file)));
        }
        assert!(seen.insert(side_key(Color::Light)));
        assert!(seen.insert(side_key(Color::Dark)));
    }

    #[test]
    fn same_seed_builds_same_table() {
        let a = build_tables(7);
        let b = build_tables(7);
        let c = build_tables(8);
        assert_eq!(a.piece_square, b.piece_square);
        assert_eq!(a.castling, b.castling);
        assert_ne!(a.piece_square, c.piece_square);
    }

    #[test]
    fn start_position_board_hash_matches_incremental() {
        let position = Position::startpos();
        assert_eq!(compute_board_hash(&position), position.board_hash());
        assert_eq!(compute_hash(&position), position.hash());
    }
}
