//! Long algebraic (`e2e4`, `e7e8q`, `e1g1`) to `Move` conversion.
//!
//! Reads the board to fill in what the packed move needs: the moving piece,
//! the captured piece, and the double-push, en-passant and castling markers.
//! Only the shape of the move is checked, not its legality.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::king_home;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}

pub fn long_algebraic_to_move(long_algebraic: &str, position: &Position) -> Result<Move, ChessErrors> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let moved = position.get(from).ok_or(ChessErrors::NoPieceOnSquare(from))?;
    let side = moved.color();
    if side != position.side_to_move() {
        return Err(ChessErrors::NotSideToMove(from));
    }

    let mut mv = Move::new(from, to, moved);
    let target = position.get(to);
    if let Some(target) = target {
        if target.color() == side {
            return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()));
        }
    }
    mv.set_capture(target);

    match moved.kind() {
        PieceKind::King if from == king_home(side) && file_of(from).abs_diff(file_of(to)) == 2 => {
            mv.set_capture(None);
            mv.set_castling(if file_of(to) > file_of(from) {
                CastlingRights::kingside(side)
            } else {
                CastlingRights::queenside(side)
            });
        }
        PieceKind::Pawn => {
            if from.abs_diff(to) == 16 {
                mv.flag_double_pawn_push(true);
            } else if target.is_none()
                && file_of(from) != file_of(to)
                && position.en_passant_square() == Some(to)
            {
                let victim_square = offset_square(to, -side.pawn_step());
                match position.get(victim_square) {
                    Some(victim) if victim == Piece::new(side.opposite(), PieceKind::Pawn) => {
                        mv.set_capture(Some(victim));
                        mv.flag_en_passant(true);
                    }
                    _ => return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned())),
                }
            }
        }
        _ => {}
    }

    let last_rank = rank_of(to) == side.opposite().back_rank();
    if text.len() == 5 {
        if moved.kind() != PieceKind::Pawn || !last_rank {
            return Err(ChessErrors::InvalidPromotion(long_algebraic.to_owned()));
        }
        let kind = match text.as_bytes()[4] {
            b'n' => PieceKind::Knight,
            b'b' => PieceKind::Bishop,
            b'r' => PieceKind::Rook,
            b'q' => PieceKind::Queen,
            _ => return Err(ChessErrors::InvalidPromotion(long_algebraic.to_owned())),
        };
        mv.set_promotion(Some(Piece::new(side, kind)));
    } else if moved.kind() == PieceKind::Pawn && last_rank {
        return Err(ChessErrors::InvalidPromotion(long_algebraic.to_owned()));
    }

    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_push_is_flagged() {
        let position = Position::startpos();
        let mv = long_algebraic_to_move("e2e4", &position).expect("e2e4 should parse");
        assert!(mv.is_double_pawn_push());
        assert_eq!(mv.piece(), Some(Piece::LightPawn));
        assert_eq!(mv.capture(), None);
        assert_eq!(move_to_long_algebraic(mv), "e2e4");
    }

    #[test]
    fn castle_gets_tag() {
        let position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("e8c8", &position).expect("e8c8 should parse");
        assert_eq!(mv.castling(), CastlingRights::DARK_QUEENSIDE);
        assert_eq!(mv.piece(), Some(Piece::DarkKing));
    }

    #[test]
    fn en_passant_records_the_pawn() {
        let position =
            Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        let mv = long_algebraic_to_move("e5d6", &position).expect("e5d6 should parse");
        assert!(mv.is_en_passant());
        assert_eq!(mv.capture(), Some(Piece::DarkPawn));
    }

    #[test]
    fn promotion_rules() {
        let position = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("e7e8n", &position).expect("e7e8n should parse");
        assert_eq!(mv.promotion(), Some(Piece::LightKnight));
        assert!(matches!(
            long_algebraic_to_move("e7e8", &position),
            Err(ChessErrors::InvalidPromotion(_))
        ));
        assert!(long_algebraic_to_move("e7e8k", &position).is_err());
    }

    #[test]
    fn wrong_side_and_empty_square_are_rejected() {
        let position = Position::startpos();
        assert_eq!(
            long_algebraic_to_move("e7e5", &position),
            Err(ChessErrors::NotSideToMove(52))
        );
        assert_eq!(
            long_algebraic_to_move("e3e4", &position),
            Err(ChessErrors::NoPieceOnSquare(20))
        );
    }
}
