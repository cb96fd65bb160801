//! Packed move representation.
//!
//! ```text
//! bits  0..=5   from square
//! bits  6..=11  to square
//! bits 12..=15  moved piece code
//! bits 16..=19  promotion piece code
//! bits 20..=23  captured piece code
//! bit  24       en-passant capture
//! bit  25       double pawn push
//! bits 26..=29  castling tag (CastlingRights bits)
//! ```
//!
//! Piece codes are `Piece::index()`; `NO_PIECE_CODE` marks an empty field.
//! A `Move` performs no validation: out-of-range inputs are masked into their
//! field and semantic legality belongs to the generator and the position.

use std::fmt;

use crate::game_state::chess_types::{CastlingRights, Piece, PieceKind, Square};
use crate::utils::algebraic::square_name;

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const PROMOTION_SHIFT: u32 = 16;
const CAPTURE_SHIFT: u32 = 20;
const CASTLING_SHIFT: u32 = 26;

const SQUARE_MASK: u32 = 0x3F;
const PIECE_MASK: u32 = 0x0F;
const CASTLING_MASK: u32 = 0x0F;

pub const NO_PIECE_CODE: u32 = 0x0F;

pub const FLAG_EN_PASSANT: u32 = 1 << 24;
pub const FLAG_DOUBLE_PAWN_PUSH: u32 = 1 << 25;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u32);

impl Default for Move {
    fn default() -> Self {
        Self::NULL
    }
}

impl Move {
    /// a1a1 with every piece field empty.
    pub const NULL: Move = Move(
        (NO_PIECE_CODE << PIECE_SHIFT)
            | (NO_PIECE_CODE << PROMOTION_SHIFT)
            | (NO_PIECE_CODE << CAPTURE_SHIFT),
    );

    #[inline]
    pub fn new(from: Square, to: Square, piece: Piece) -> Self {
        let mut mv = Self::NULL;
        mv.set_from(from);
        mv.set_to(to);
        mv.set_piece(Some(piece));
        mv
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn field(self, shift: u32, mask: u32) -> u32 {
        (self.0 >> shift) & mask
    }

    #[inline]
    fn set_field(&mut self, shift: u32, mask: u32, value: u32) {
        self.0 = (self.0 & !(mask << shift)) | ((value & mask) << shift);
    }

    #[inline]
    const fn piece_from_code(code: u32) -> Option<Piece> {
        Piece::from_index(code as usize)
    }

    #[inline]
    const fn piece_to_code(piece: Option<Piece>) -> u32 {
        match piece {
            Some(piece) => piece.index() as u32,
            None => NO_PIECE_CODE,
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.field(FROM_SHIFT, SQUARE_MASK) as Square
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.field(TO_SHIFT, SQUARE_MASK) as Square
    }

    /// The piece standing on the from-square before the move.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        Self::piece_from_code(self.field(PIECE_SHIFT, PIECE_MASK))
    }

    #[inline]
    pub const fn promotion(self) -> Option<Piece> {
        Self::piece_from_code(self.field(PROMOTION_SHIFT, PIECE_MASK))
    }

    /// The piece removed by the move, recorded before the move is applied.
    #[inline]
    pub const fn capture(self) -> Option<Piece> {
        Self::piece_from_code(self.field(CAPTURE_SHIFT, PIECE_MASK))
    }

    #[inline]
    pub const fn castling(self) -> CastlingRights {
        CastlingRights::from_bits(self.field(CASTLING_SHIFT, CASTLING_MASK) as u8)
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.0 & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub const fn is_double_pawn_push(self) -> bool {
        self.0 & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.field(CAPTURE_SHIFT, PIECE_MASK) != NO_PIECE_CODE
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.field(PROMOTION_SHIFT, PIECE_MASK) != NO_PIECE_CODE
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        self.field(CASTLING_SHIFT, CASTLING_MASK) != 0
    }

    #[inline]
    pub fn set_from(&mut self, square: Square) {
        self.set_field(FROM_SHIFT, SQUARE_MASK, square as u32);
    }

    #[inline]
    pub fn set_to(&mut self, square: Square) {
        self.set_field(TO_SHIFT, SQUARE_MASK, square as u32);
    }

    #[inline]
    pub fn set_piece(&mut self, piece: Option<Piece>) {
        self.set_field(PIECE_SHIFT, PIECE_MASK, Self::piece_to_code(piece));
    }

    #[inline]
    pub fn set_promotion(&mut self, piece: Option<Piece>) {
        self.set_field(PROMOTION_SHIFT, PIECE_MASK, Self::piece_to_code(piece));
    }

    #[inline]
    pub fn set_capture(&mut self, piece: Option<Piece>) {
        self.set_field(CAPTURE_SHIFT, PIECE_MASK, Self::piece_to_code(piece));
    }

    #[inline]
    pub fn set_castling(&mut self, side: CastlingRights) {
        self.set_field(CASTLING_SHIFT, CASTLING_MASK, side.bits() as u32);
    }

    #[inline]
    pub fn flag_en_passant(&mut self, on: bool) {
        if on {
            self.0 |= FLAG_EN_PASSANT;
        } else {
            self.0 &= !FLAG_EN_PASSANT;
        }
    }

    #[inline]
    pub fn flag_double_pawn_push(&mut self, on: bool) {
        if on {
            self.0 |= FLAG_DOUBLE_PAWN_PUSH;
        } else {
            self.0 &= !FLAG_DOUBLE_PAWN_PUSH;
        }
    }
}

fn promotion_suffix(piece: Piece) -> Option<char> {
    match piece.kind() {
        PieceKind::Knight => Some('n'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Rook => Some('r'),
        PieceKind::Queen => Some('q'),
        PieceKind::Pawn | PieceKind::King => None,
    }
}

/// Long algebraic form, e.g. `e2e4`, `e7e8q`, `e1g1`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from()), square_name(self.to()))?;
        if let Some(suffix) = self.promotion().and_then(promotion_suffix) {
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Move")
            .field("lan", &self.to_string())
            .field("piece", &self.piece())
            .field("capture", &self.capture())
            .field("promotion", &self.promotion())
            .field("castling", &self.castling())
            .field("en_passant", &self.is_en_passant())
            .field("double_push", &self.is_double_pawn_push())
            .finish()
    }
}
