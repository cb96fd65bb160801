//! Crate root module declarations for the Plum board engine.
//!
//! This file exposes the position model (types, piece lists, undo history,
//! make/unmake), the packed move encoding, Zobrist hashing, and the setup
//! helpers (algebraic squares, FEN, long algebraic moves) so search code,
//! move generators, binaries and tests can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board_location;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod make_unmake;
    pub mod piece_list;
    pub mod position;
    pub mod position_config;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod search {
    pub mod zobrist;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}

pub use chess_errors::ChessErrors;
pub use game_state::chess_types::{
    Bitboard, CastlingRights, Color, Piece, PieceKind, Position, Square,
};
pub use game_state::position_config::PositionConfig;
pub use moves::chess_move::Move;
