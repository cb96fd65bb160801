//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the home squares castling is keyed on.

use crate::game_state::chess_types::{square_at, CastlingRights, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Capacity of one piece-location list. Ten covers two original knights plus
/// eight promotions.
pub const MAX_PIECES_PER_KIND: usize = 10;

/// Default number of undo frames a position can hold.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1024;

/// Deepest history a position supports; `ply` is a `u16`.
pub const MAX_HISTORY_CAPACITY: usize = u16::MAX as usize;

pub const KING_FILE: u8 = 4;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;
pub const KINGSIDE_ROOK_FILE: u8 = 7;

#[inline]
pub const fn king_home(color: Color) -> Square {
    square_at(KING_FILE, color.back_rank())
}

/// Home square of the rook involved in a castle tagged with `side`.
#[inline]
pub const fn castling_rook_home(color: Color, side: CastlingRights) -> Square {
    let file = if side.intersects(CastlingRights::QUEENSIDE) {
        QUEENSIDE_ROOK_FILE
    } else {
        KINGSIDE_ROOK_FILE
    };
    square_at(file, color.back_rank())
}

/// Direction the king travels for a castle tagged with `side` (+1 king-side, -1 queen-side).
#[inline]
pub const fn castling_direction(side: CastlingRights) -> i8 {
    if side.intersects(CastlingRights::KINGSIDE) {
        1
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castling_geometry() {
        assert_eq!(king_home(Color::Light), 4);
        assert_eq!(king_home(Color::Dark), 60);
        assert_eq!(castling_rook_home(Color::Light, CastlingRights::LIGHT_KINGSIDE), 7);
        assert_eq!(castling_rook_home(Color::Dark, CastlingRights::DARK_QUEENSIDE), 56);
        assert_eq!(castling_direction(CastlingRights::DARK_KINGSIDE), 1);
        assert_eq!(castling_direction(CastlingRights::LIGHT_QUEENSIDE), -1);
    }
}
