use log::error;

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single undo record for `make_move` / `make_null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    /// `None` for a null move.
    pub mv: Option<Move>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
    pub prev_done_castles: CastlingRights,

    /// Full `Position::hash()` before the move; checked after undo.
    pub prev_zobrist_key: u64,
}

/// Fixed-capacity stack of undo records indexed by history ply.
///
/// Storage is reserved up front and never grows: pushing past capacity is a
/// resource-exhaustion bug in the caller and panics.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    frames: Vec<UndoState>,
    capacity: usize,
}

impl UndoHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn last(&self) -> Option<&UndoState> {
        self.frames.last()
    }

    #[inline]
    pub(crate) fn push(&mut self, frame: UndoState) {
        if self.frames.len() == self.capacity {
            error!("undo history exhausted at {} frames", self.capacity);
            panic!("undo history overflow (capacity {})", self.capacity);
        }
        self.frames.push(frame);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> UndoState {
        match self.frames.pop() {
            Some(frame) => frame,
            None => panic!("undo called with empty history"),
        }
    }

    /// Iterate frames from the oldest to the most recent.
    pub fn iter(&self) -> impl Iterator<Item = &UndoState> {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> UndoState {
        UndoState {
            mv: None,
            prev_castling_rights: CastlingRights::ALL,
            prev_en_passant_square: None,
            prev_halfmove_clock: 0,
            prev_fullmove_number: 1,
            prev_done_castles: CastlingRights::NONE,
            prev_zobrist_key: 0,
        }
    }

    #[test]
    fn push_pop_is_lifo() {
        let mut history = UndoHistory::with_capacity(4);
        history.push(frame());
        history.push(UndoState {
            prev_halfmove_clock: 7,
            ..frame()
        });
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().prev_halfmove_clock, 7);
        assert_eq!(history.pop().prev_halfmove_clock, 0);
        assert!(history.is_empty());
    }

    #[test]
    #[should_panic(expected = "undo history overflow")]
    fn overflow_is_fatal() {
        let mut history = UndoHistory::with_capacity(1);
        history.push(frame());
        history.push(frame());
    }

    #[test]
    #[should_panic(expected = "empty history")]
    fn pop_empty_is_fatal() {
        UndoHistory::with_capacity(1).pop();
    }
}
