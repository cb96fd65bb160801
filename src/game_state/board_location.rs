//! Two-dimensional companion coordinate for squares.
//!
//! Storage is always keyed by `Square`; `BoardPoint` exists for geometry
//! (direction vectors, file/rank math) where signed arithmetic is natural.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{file_of, rank_of, square_at, Square, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardPoint {
    pub file: i8,
    pub rank: i8,
}

impl BoardPoint {
    #[inline]
    pub fn from_file_rank(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        if Self::in_bounds(file, rank) {
            Ok(Self { file, rank })
        } else {
            Err(ChessErrors::InvalidFileOrRank(file, rank))
        }
    }

    #[inline]
    pub const fn from_square(square: Square) -> Self {
        Self {
            file: file_of(square) as i8,
            rank: rank_of(square) as i8,
        }
    }

    #[inline]
    pub const fn to_square(self) -> Square {
        square_at(self.file as u8, self.rank as u8)
    }

    /// Moves the point by a file and rank offset.
    ///
    /// # Returns
    ///
    /// The shifted point, or `TriedToMoveOutOfBounds` if it would leave the board.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Result<Self, ChessErrors> {
        let file = self.file + d_file;
        let rank = self.rank + d_rank;
        if Self::in_bounds(file, rank) {
            Ok(Self { file, rank })
        } else {
            Err(ChessErrors::TriedToMoveOutOfBounds {
                file: self.file,
                rank: self.rank,
                d_file,
                d_rank,
            })
        }
    }

    #[inline]
    fn in_bounds(file: i8, rank: i8) -> bool {
        let size = BOARD_SIZE as i8;
        (0..size).contains(&file) && (0..size).contains(&rank)
    }
}

impl From<BoardPoint> for Square {
    fn from(point: BoardPoint) -> Self {
        point.to_square()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_round_trip() {
        for square in 0..64u8 {
            assert_eq!(BoardPoint::from_square(square).to_square(), square);
        }
    }

    #[test]
    fn offset_off_board_is_an_error() {
        let h1 = BoardPoint::from_square(7);
        assert!(h1.offset(1, 0).is_err());
        assert_eq!(h1.offset(-2, 0).map(Square::from), Ok(5));
        assert!(BoardPoint::from_file_rank(8, 0).is_err());
    }
}
