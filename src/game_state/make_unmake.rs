//! Ply transitions: `make_move` / `undo_move` and the null-move pair.
//!
//! Every board change goes through `Position::set`. The volatile scalar state
//! (rights, en-passant square, clocks, castles played) is snapshotted into an
//! `UndoState` before a move and copied back on undo, so reversal never
//! recomputes anything.

use crate::game_state::chess_rules::{castling_direction, castling_rook_home, king_home};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::moves::chess_move::Move;

impl Position {
    fn push_frame(&mut self, mv: Option<Move>) {
        let frame = UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
            prev_done_castles: self.done_castles,
            prev_zobrist_key: self.hash(),
        };
        self.history.push(frame);
        self.ply += 1;
    }

    fn restore_frame(&mut self, frame: &UndoState) {
        self.castling_rights = frame.prev_castling_rights;
        self.en_passant_square = frame.prev_en_passant_square;
        self.halfmove_clock = frame.prev_halfmove_clock;
        self.fullmove_number = frame.prev_fullmove_number;
        self.done_castles = frame.prev_done_castles;
    }

    #[inline]
    fn audit_hash(&self, expected: u64) {
        if cfg!(any(debug_assertions, feature = "undo-audit")) {
            assert_eq!(
                self.hash(),
                expected,
                "hash mismatch after undo: make/undo calls are not paired"
            );
        }
    }

    /// Apply `mv` for the side to move and push one undo frame.
    ///
    /// `mv` must be well formed for this position: moving piece on the
    /// from-square, capture field matching the captured piece, castling tag
    /// only on a castle.
    pub fn make_move(&mut self, mv: Move) {
        self.push_frame(Some(mv));

        let side = self.side_to_move;
        let rook = Piece::new(side, PieceKind::Rook);
        let king = Piece::new(side, PieceKind::King);

        self.en_passant_square = None;
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);

        let castle = mv.castling();
        if castle.is_empty() {
            let Some(mut piece) = mv.piece() else {
                panic!("move {mv} carries no moving piece");
            };
            debug_assert_eq!(self.get(mv.from()), Some(piece), "moving piece is not on {}", mv.from());

            if piece == rook {
                // Keyed on the file the rook leaves, not on its exact home square.
                match file_of(mv.from()) {
                    7 => self.castling_rights &= !CastlingRights::kingside(side),
                    0 => self.castling_rights &= !CastlingRights::queenside(side),
                    _ => {}
                }
            } else if piece.kind() == PieceKind::Pawn {
                let behind = offset_square(mv.to(), -side.pawn_step());
                if mv.is_double_pawn_push() {
                    self.en_passant_square = Some(behind);
                } else if mv.is_en_passant() {
                    self.set(behind, None);
                } else if let Some(promotion) = mv.promotion() {
                    piece = promotion;
                }
                self.halfmove_clock = 0;
            } else if piece == king {
                self.castling_rights &= !CastlingRights::for_color(side);
            }

            if let Some(captured) = mv.capture() {
                self.halfmove_clock = 0;

                let enemy = side.opposite();
                if captured.kind() == PieceKind::Rook && rank_of(mv.to()) == enemy.back_rank() {
                    match file_of(mv.to()) {
                        7 => self.castling_rights &= !CastlingRights::kingside(enemy),
                        0 => self.castling_rights &= !CastlingRights::queenside(enemy),
                        _ => {}
                    }
                }
            }

            self.set(mv.from(), None);
            self.set(mv.to(), Some(piece));
        } else {
            let king_from = king_home(side);
            let rook_from = castling_rook_home(side, castle);
            let dir = castling_direction(castle);

            self.set(rook_from, None);
            self.set(king_from, None);
            self.set(offset_square(king_from, 2 * dir), Some(king));
            self.set(offset_square(king_from, dir), Some(rook));

            self.done_castles |= castle;
        }

        if side == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = side.opposite();
    }

    /// Reverse the most recent `make_move`.
    ///
    /// Panics when the history is empty or its top frame is a null move.
    pub fn undo_move(&mut self) {
        assert!(!self.history.is_empty(), "undo_move called at the root");

        self.side_to_move = self.side_to_move.opposite();
        let frame = self.history.pop();
        self.ply -= 1;

        let Some(mv) = frame.mv else {
            panic!("undo_move called on a null-move frame; use undo_null");
        };

        let side = self.side_to_move;
        let castle = mv.castling();
        if castle.is_empty() {
            self.set(mv.from(), mv.piece());
            if mv.is_en_passant() {
                self.set(offset_square(mv.to(), -side.pawn_step()), mv.capture());
                self.set(mv.to(), None);
            } else {
                self.set(mv.to(), mv.capture());
            }
        } else {
            let king_from = king_home(side);
            let rook_from = castling_rook_home(side, castle);
            let dir = castling_direction(castle);

            self.set(rook_from, Some(Piece::new(side, PieceKind::Rook)));
            self.set(king_from, Some(Piece::new(side, PieceKind::King)));
            self.set(offset_square(king_from, 2 * dir), None);
            self.set(offset_square(king_from, dir), None);
        }

        self.restore_frame(&frame);
        self.audit_hash(frame.prev_zobrist_key);
    }

    /// Pass the turn without moving a piece.
    pub fn make_null(&mut self) {
        self.push_frame(None);
        self.en_passant_square = None;
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Reverse the most recent `make_null`.
    pub fn undo_null(&mut self) {
        assert!(!self.history.is_empty(), "undo_null called at the root");

        let frame = self.history.pop();
        assert!(frame.mv.is_none(), "undo_null called on a move frame; use undo_move");
        self.ply -= 1;

        self.restore_frame(&frame);
        self.side_to_move = self.side_to_move.opposite();
        self.audit_hash(frame.prev_zobrist_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(position: &Position, from: Square, to: Square) -> Move {
        let piece = position.get(from).expect("from-square should hold a piece");
        let mut mv = Move::new(from, to, piece);
        mv.set_capture(position.get(to));
        mv
    }

    #[test]
    fn quiet_move_increments_clock_and_flips_side() {
        let mut position = Position::startpos();
        let mv = quiet(&position, 6, 21); // g1f3
        position.make_move(mv);
        assert_eq!(position.get(21), Some(Piece::LightKnight));
        assert_eq!(position.get(6), None);
        assert_eq!(position.halfmove_clock(), 1);
        assert_eq!(position.side_to_move(), Color::Dark);
        assert_eq!(position.ply(), 1);
        assert_eq!(position.last_move(), Some(mv));
        assert!(position.check_consistency().is_ok());

        position.undo_move();
        assert_eq!(position.get(6), Some(Piece::LightKnight));
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.side_to_move(), Color::Light);
        assert_eq!(position.hash(), Position::startpos().hash());
    }

    #[test]
    fn double_push_sets_passed_square() {
        let mut position = Position::startpos();
        let mut mv = quiet(&position, 12, 28);
        mv.flag_double_pawn_push(true);
        position.make_move(mv);
        assert_eq!(position.en_passant_square(), Some(20));

        let mut reply = quiet(&position, 51, 35); // d7d5
        reply.flag_double_pawn_push(true);
        position.make_move(reply);
        assert_eq!(position.en_passant_square(), Some(43));
        assert_eq!(position.fullmove_number(), 2);
    }

    #[test]
    fn null_move_round_trip() {
        let mut position = Position::startpos();
        let mut mv = quiet(&position, 12, 28);
        mv.flag_double_pawn_push(true);
        position.make_move(mv);
        let before = position.hash();

        position.make_null();
        assert_eq!(position.en_passant_square(), None);
        assert_eq!(position.side_to_move(), Color::Light);
        assert_eq!(position.last_move(), None);
        assert_ne!(position.hash(), before);

        position.undo_null();
        assert_eq!(position.hash(), before);
        assert_eq!(position.en_passant_square(), Some(20));
        assert_eq!(position.side_to_move(), Color::Dark);
        assert_eq!(position.ply(), 1);
    }

    #[test]
    #[should_panic(expected = "at the root")]
    fn undo_at_root_panics() {
        Position::startpos().undo_move();
    }

    #[test]
    #[should_panic(expected = "null-move frame")]
    fn undo_move_on_null_frame_panics() {
        let mut position = Position::startpos();
        position.make_null();
        position.undo_move();
    }
}
