//! Errors used by the setup layer and the consistency audit.
//!
//! The make/undo hot path never returns errors: its preconditions (valid
//! squares, non-empty history, matching make/undo pairs) are the caller's
//! responsibility and violating them panics. `ChessErrors` covers the failure
//! modes that depend on outside input, such as a malformed FEN string or a
//! long-algebraic move that does not fit the position, plus the audit report
//! produced by `Position::check_consistency`.

use thiserror::Error;

use crate::game_state::chess_types::{Piece, Square};

/// Unified error type for the board crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A board point was moved by `(d_file, d_rank)` off the board.
    ///
    /// Payload: (origin file, origin rank, d_file, d_rank)
    #[error("offset ({d_file}, {d_rank}) from ({file}, {rank}) leaves the board")]
    TriedToMoveOutOfBounds {
        file: i8,
        rank: i8,
        d_file: i8,
        d_rank: i8,
    },

    /// File or rank outside `0..=7`.
    #[error("invalid file or rank ({0}, {1})")]
    InvalidFileOrRank(i8, i8),

    /// An algebraic square or move string could not be interpreted.
    #[error("invalid algebraic string '{0}'")]
    InvalidAlgebraicString(String),

    /// The FEN string does not have the expected field layout.
    #[error("malformed FEN: {0}")]
    InvalidFenForm(String),

    /// An unexpected character inside a FEN field.
    #[error("unexpected FEN token '{0}'")]
    InvalidFenToken(char),

    /// A setup would need more pieces of one kind than a piece list can hold.
    #[error("too many {0:?} pieces for the piece list")]
    PieceListFull(Piece),

    /// A move names an empty from-square.
    #[error("no piece on from-square {0}")]
    NoPieceOnSquare(Square),

    /// A move names a piece that does not belong to the side to move.
    #[error("piece on square {0} does not belong to the side to move")]
    NotSideToMove(Square),

    /// Promotion suffix is missing, misplaced, or names an invalid piece.
    #[error("invalid promotion in move '{0}'")]
    InvalidPromotion(String),

    /// The redundant indices of a position disagree with each other.
    #[error("position indices are inconsistent: {0}")]
    Inconsistent(String),
}
