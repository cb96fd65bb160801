//! Primitive board types shared by every layer of the position engine.
//!
//! Squares are `u8` indices with `a1 = 0` and `h8 = 63`, bitboards are plain
//! `u64` masks, and pieces are the twelve colored piece variants. The absence
//! of a piece is always spelled `Option::<Piece>::None`.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

pub use crate::game_state::position::Position;
pub use crate::game_state::undo_state::{UndoHistory, UndoState};

/// Board square index (`0..=63`).
pub type Square = u8;

/// One bit per square.
pub type Bitboard = u64;

pub const BOARD_SIZE: u8 = 8;
pub const SQUARE_COUNT: usize = 64;
pub const PIECE_VARIANTS: usize = 12;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank on which this side's king and rooks start.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Square offset of a single pawn step for this side.
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::Light => 8,
            Color::Dark => -8,
        }
    }
}

/// Piece kind without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Rooks and queens, the pieces tracked by the big-piece counters.
    #[inline]
    pub const fn is_big(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }
}

/// One of the twelve colored pieces.
///
/// The discriminant is the dense piece index used for bitboard and piece-list
/// arrays and for the packed move encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    LightPawn = 0,
    LightKnight,
    LightBishop,
    LightRook,
    LightQueen,
    LightKing,
    DarkPawn,
    DarkKnight,
    DarkBishop,
    DarkRook,
    DarkQueen,
    DarkKing,
}

impl Piece {
    pub const ALL: [Piece; PIECE_VARIANTS] = [
        Piece::LightPawn,
        Piece::LightKnight,
        Piece::LightBishop,
        Piece::LightRook,
        Piece::LightQueen,
        Piece::LightKing,
        Piece::DarkPawn,
        Piece::DarkKnight,
        Piece::DarkBishop,
        Piece::DarkRook,
        Piece::DarkQueen,
        Piece::DarkKing,
    ];

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self::ALL[color.index() * 6 + kind.index()]
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PIECE_VARIANTS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        if (self as u8) < 6 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind::ALL[(self as usize) % 6]
    }

    /// FEN letter: uppercase for light, lowercase for dark.
    pub const fn fen_char(self) -> char {
        let upper = match self.kind() {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        match self.color() {
            Color::Light => upper,
            Color::Dark => upper.to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % BOARD_SIZE
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / BOARD_SIZE
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * BOARD_SIZE + file
}

#[inline]
pub const fn is_inside(square: Square) -> bool {
    (square as usize) < SQUARE_COUNT
}

#[inline]
pub const fn square_bit(square: Square) -> Bitboard {
    1u64 << square
}

/// Offset a square by a signed step. The caller guarantees the result stays on the board.
#[inline]
pub const fn offset_square(square: Square, delta: i8) -> Square {
    (square as i8 + delta) as Square
}

/// Set of castling sides over {light O-O, light O-O-O, dark O-O, dark O-O-O}.
///
/// Used for the position's rights, for the castling tag inside a move (one
/// bit, or empty) and for the record of castles already played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: Self = Self(0);
    pub const LIGHT_KINGSIDE: Self = Self(1 << 0);
    pub const LIGHT_QUEENSIDE: Self = Self(1 << 1);
    pub const DARK_KINGSIDE: Self = Self(1 << 2);
    pub const DARK_QUEENSIDE: Self = Self(1 << 3);

    pub const LIGHT: Self = Self(Self::LIGHT_KINGSIDE.0 | Self::LIGHT_QUEENSIDE.0);
    pub const DARK: Self = Self(Self::DARK_KINGSIDE.0 | Self::DARK_QUEENSIDE.0);
    pub const KINGSIDE: Self = Self(Self::LIGHT_KINGSIDE.0 | Self::DARK_KINGSIDE.0);
    pub const QUEENSIDE: Self = Self(Self::LIGHT_QUEENSIDE.0 | Self::DARK_QUEENSIDE.0);
    pub const ALL: Self = Self(0x0F);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::Light => Self::LIGHT,
            Color::Dark => Self::DARK,
        }
    }

    #[inline]
    pub const fn kingside(color: Color) -> Self {
        match color {
            Color::Light => Self::LIGHT_KINGSIDE,
            Color::Dark => Self::DARK_KINGSIDE,
        }
    }

    #[inline]
    pub const fn queenside(color: Color) -> Self {
        match color {
            Color::Light => Self::LIGHT_QUEENSIDE,
            Color::Dark => Self::DARK_QUEENSIDE,
        }
    }
}

impl BitOr for CastlingRights {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CastlingRights {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CastlingRights {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for CastlingRights {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitXor for CastlingRights {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for CastlingRights {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}
