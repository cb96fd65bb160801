//! Core incremental board state representation.
//!
//! `Position` stores the same placement three ways: one bitboard per piece,
//! one dense square list per piece, and rook/queen counters per color. A
//! running Zobrist component covers placement only. All four are written by
//! `set` and nothing else; the fields are private to this module so the rest
//! of the crate cannot bypass it.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{MAX_HISTORY_CAPACITY, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::game_state::piece_list::PieceList;
use crate::game_state::position_config::PositionConfig;
use crate::game_state::undo_state::UndoHistory;
use crate::moves::chess_move::Move;
use crate::search::zobrist;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Mutable chess position with an explicit undo log.
#[derive(Debug, Clone)]
pub struct Position {
    // --- Placement indices, written only by `set` ---
    boards: [Bitboard; PIECE_VARIANTS],
    piece_lists: [PieceList; PIECE_VARIANTS],
    big_pieces: [u8; 2],
    board_hash: u64,

    // --- Side and state flags ---
    pub(super) side_to_move: Color,
    pub(super) castling_rights: CastlingRights,
    pub(super) en_passant_square: Option<Square>,
    pub(super) done_castles: CastlingRights,

    // --- Clocks / move counters ---
    pub(super) halfmove_clock: u16,
    pub(super) fullmove_number: u16,
    pub(super) ply: u16,

    // --- Make/unmake stack ---
    pub(super) history: UndoHistory,
}

impl Default for Position {
    fn default() -> Self {
        Self::with_config(&PositionConfig::default())
    }
}

impl Position {
    /// Empty board, light to move, no rights.
    pub fn with_config(config: &PositionConfig) -> Self {
        zobrist::init_hash_with_seed(config.zobrist_seed);
        Self {
            boards: [0; PIECE_VARIANTS],
            piece_lists: [PieceList::default(); PIECE_VARIANTS],
            big_pieces: [0; 2],
            board_hash: 0,

            side_to_move: Color::Light,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,
            done_castles: CastlingRights::NONE,

            halfmove_clock: 0,
            fullmove_number: 1,
            ply: 0,

            history: UndoHistory::with_capacity(config.history_capacity.min(MAX_HISTORY_CAPACITY)),
        }
    }

    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn startpos() -> Self {
        match parse_fen(STARTING_POSITION_FEN) {
            Ok(position) => position,
            Err(err) => unreachable!("starting FEN must parse: {err}"),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece on `square`, scanning the twelve bitboards.
    pub fn get(&self, square: Square) -> Option<Piece> {
        assert!(is_inside(square), "square {square} is off the board");
        let bit = square_bit(square);
        Piece::ALL
            .into_iter()
            .find(|piece| self.boards[piece.index()] & bit != 0)
    }

    /// Replace whatever stands on `square` with `piece` (or clear it).
    ///
    /// This is the only writer of the bitboards, piece lists, big-piece
    /// counters and placement hash.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        assert!(is_inside(square), "square {square} is off the board");
        let bit = square_bit(square);

        if let Some(onboard) = self.get(square) {
            let idx = onboard.index();
            self.boards[idx] &= !bit;
            let listed = self.piece_lists[idx].remove(square);
            debug_assert!(listed, "{onboard:?} on {square} missing from its piece list");
            if onboard.kind().is_big() {
                self.big_pieces[onboard.color().index()] -= 1;
            }
            self.board_hash ^= zobrist::piece_square_key(square, onboard);
        }

        if let Some(piece) = piece {
            let idx = piece.index();
            self.boards[idx] |= bit;
            self.piece_lists[idx].push(square);
            if piece.kind().is_big() {
                self.big_pieces[piece.color().index()] += 1;
            }
            self.board_hash ^= zobrist::piece_square_key(square, piece);
        }
    }

    /// Transposition key: placement hash combined with side, rights and en-passant file.
    ///
    /// With no en-passant square the file-0 key is used.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.board_hash
            ^ zobrist::en_passant_file_key(self.en_passant_square.map_or(0, file_of))
            ^ zobrist::side_key(self.side_to_move)
            ^ zobrist::castling_key(self.castling_rights)
    }

    #[inline]
    pub fn board_hash(&self) -> u64 {
        self.board_hash
    }

    #[inline]
    pub fn board(&self, piece: Piece) -> Bitboard {
        self.boards[piece.index()]
    }

    /// Squares holding `piece`, in unspecified order.
    #[inline]
    pub fn pieces(&self, piece: Piece) -> &[Square] {
        self.piece_lists[piece.index()].as_slice()
    }

    #[inline]
    pub fn piece_count(&self, piece: Piece) -> usize {
        self.piece_lists[piece.index()].len()
    }

    /// Number of rooks and queens `color` has on the board.
    #[inline]
    pub fn big_pieces(&self, color: Color) -> u8 {
        self.big_pieces[color.index()]
    }

    pub fn occupancy(&self, color: Color) -> Bitboard {
        let start = color.index() * 6;
        self.boards[start..start + 6]
            .iter()
            .fold(0, |acc, &bb| acc | bb)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.boards.iter().fold(0, |acc, &bb| acc | bb)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(Piece::new(color, PieceKind::King)).first().copied()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    /// Castling sides already executed on this line.
    #[inline]
    pub fn done_castles(&self) -> CastlingRights {
        self.done_castles
    }

    /// Half-moves since the last pawn move or capture.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Half-moves applied since construction; equals `history_len()`.
    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Most recent real move, or `None` at the root or after a null move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().and_then(|frame| frame.mv)
    }

    fn assert_at_root(&self, what: &str) {
        assert!(
            self.history.is_empty(),
            "cannot set {what} with {} moves on the undo stack",
            self.history.len()
        );
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.assert_at_root("side to move");
        self.side_to_move = color;
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.assert_at_root("castling rights");
        self.castling_rights = rights;
    }

    pub fn set_en_passant_square(&mut self, square: Option<Square>) {
        self.assert_at_root("en-passant square");
        self.en_passant_square = square;
    }

    pub fn set_halfmove_clock(&mut self, clock: u16) {
        self.assert_at_root("halfmove clock");
        self.halfmove_clock = clock;
    }

    pub fn set_fullmove_number(&mut self, number: u16) {
        self.assert_at_root("fullmove number");
        self.fullmove_number = number;
    }

    /// Audit every redundant index against the bitboards.
    ///
    /// # Returns
    ///
    /// `Ok(())` when bitboards are disjoint, each piece list holds exactly the
    /// bits of its board, the big-piece counters match, the placement hash
    /// equals a fresh recomputation, and `ply` tracks the history depth.
    pub fn check_consistency(&self) -> Result<(), ChessErrors> {
        let mut seen: Bitboard = 0;
        for piece in Piece::ALL {
            let bb = self.board(piece);
            if bb & seen != 0 {
                return Err(ChessErrors::Inconsistent(format!(
                    "{piece:?} board overlaps another piece board"
                )));
            }
            seen |= bb;

            let listed = self
                .pieces(piece)
                .iter()
                .fold(0u64, |acc, &sq| acc | square_bit(sq));
            if listed != bb || self.piece_count(piece) != bb.count_ones() as usize {
                return Err(ChessErrors::Inconsistent(format!(
                    "{piece:?} list {:?} does not match board {bb:#018x}",
                    self.pieces(piece)
                )));
            }
        }

        for color in [Color::Light, Color::Dark] {
            let expected = self.piece_count(Piece::new(color, PieceKind::Rook))
                + self.piece_count(Piece::new(color, PieceKind::Queen));
            if self.big_pieces(color) as usize != expected {
                return Err(ChessErrors::Inconsistent(format!(
                    "{color:?} big-piece counter {} but {expected} rooks and queens",
                    self.big_pieces(color)
                )));
            }
        }

        if zobrist::compute_board_hash(self) != self.board_hash {
            return Err(ChessErrors::Inconsistent(
                "incremental placement hash differs from recomputation".to_owned(),
            ));
        }

        if self.ply as usize != self.history.len() {
            return Err(ChessErrors::Inconsistent(format!(
                "ply {} but {} history frames",
                self.ply,
                self.history.len()
            )));
        }

        Ok(())
    }
}
