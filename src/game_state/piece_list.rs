//! Dense per-piece square lists.
//!
//! Each list is an unordered set stored as a fixed array plus a length.
//! Removal swaps the last element into the hole, so iteration order changes
//! but membership stays exact.

use crate::game_state::chess_rules::MAX_PIECES_PER_KIND;
use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceList {
    squares: [Square; MAX_PIECES_PER_KIND],
    len: u8,
}

impl Default for PieceList {
    fn default() -> Self {
        Self {
            squares: [0; MAX_PIECES_PER_KIND],
            len: 0,
        }
    }
}

impl PieceList {
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == MAX_PIECES_PER_KIND
    }

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len()]
    }

    /// Append a square. Panics when the list is full.
    #[inline]
    pub(crate) fn push(&mut self, square: Square) {
        assert!(!self.is_full(), "piece list overflow at square {square}");
        self.squares[self.len()] = square;
        self.len += 1;
    }

    /// Swap-remove `square`. Returns `false` if it was not listed.
    #[inline]
    pub(crate) fn remove(&mut self, square: Square) -> bool {
        let len = self.len();
        match self.squares[..len].iter().position(|&s| s == square) {
            Some(i) => {
                self.squares.swap(i, len - 1);
                self.len -= 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_swaps_last_into_hole() {
        let mut list = PieceList::default();
        list.push(8);
        list.push(9);
        list.push(10);
        assert!(list.remove(8));
        assert_eq!(list.as_slice(), &[10, 9]);
        assert!(!list.remove(8));
        assert_eq!(list.len(), 2);
    }

    #[test]
    #[should_panic(expected = "piece list overflow")]
    fn push_past_capacity_panics() {
        let mut list = PieceList::default();
        for sq in 0..=MAX_PIECES_PER_KIND as Square {
            list.push(sq);
        }
    }
}
