#![allow(dead_code)]

use plum_board::utils::long_algebraic::long_algebraic_to_move;
use plum_board::{Bitboard, CastlingRights, Color, Move, Piece, Position, Square};

/// Every observable field, with piece lists compared as sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub boards: Vec<Bitboard>,
    pub lists: Vec<Vec<Square>>,
    pub big_pieces: [u8; 2],
    pub side: Color,
    pub rights: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub done_castles: CastlingRights,
    pub ply: u16,
    pub hash: u64,
}

pub fn snapshot(position: &Position) -> Snapshot {
    Snapshot {
        boards: Piece::ALL.iter().map(|&p| position.board(p)).collect(),
        lists: Piece::ALL
            .iter()
            .map(|&p| {
                let mut squares = position.pieces(p).to_vec();
                squares.sort_unstable();
                squares
            })
            .collect(),
        big_pieces: [
            position.big_pieces(Color::Light),
            position.big_pieces(Color::Dark),
        ],
        side: position.side_to_move(),
        rights: position.castling_rights(),
        en_passant: position.en_passant_square(),
        halfmove_clock: position.halfmove_clock(),
        fullmove_number: position.fullmove_number(),
        done_castles: position.done_castles(),
        ply: position.ply(),
        hash: position.hash(),
    }
}

pub fn lan(position: &Position, text: &str) -> Move {
    long_algebraic_to_move(text, position)
        .unwrap_or_else(|e| panic!("{text} should parse in {}: {e}", position.to_fen()))
}

pub fn play(position: &mut Position, line: &[&str]) {
    for text in line {
        let mv = lan(position, text);
        position.make_move(mv);
    }
}

pub const SAMPLE_FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
];
