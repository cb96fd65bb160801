//! FEN-to-Position parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string.
//! Pieces are placed through `Position::set`, so every index and the
//! placement hash come out consistent.

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::position_config::PositionConfig;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, ChessErrors> {
    parse_fen_with_config(fen, &PositionConfig::default())
}

pub fn parse_fen_with_config(fen: &str, config: &PositionConfig) -> Result<Position, ChessErrors> {
    let mut parts = fen.split_whitespace();
    let mut field = |name: &str| {
        parts
            .next()
            .ok_or_else(|| ChessErrors::InvalidFenForm(format!("missing {name} field")))
    };

    let board_part = field("board layout")?;
    let side_part = field("side-to-move")?;
    let castling_part = field("castling rights")?;
    let en_passant_part = field("en-passant square")?;
    let halfmove_part = field("halfmove clock")?;
    let fullmove_part = field("fullmove number")?;

    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFenForm(
            "FEN has extra trailing fields".to_owned(),
        ));
    }

    let mut position = Position::with_config(config);

    parse_board(board_part, &mut position)?;
    position.set_side_to_move(parse_side_to_move(side_part)?);
    position.set_castling_rights(parse_castling_rights(castling_part)?);
    position.set_en_passant_square(parse_en_passant_square(en_passant_part)?);
    position.set_halfmove_clock(halfmove_part.parse::<u16>().map_err(|_| {
        ChessErrors::InvalidFenForm(format!("invalid halfmove clock: {halfmove_part}"))
    })?);
    position.set_fullmove_number(fullmove_part.parse::<u16>().map_err(|_| {
        ChessErrors::InvalidFenForm(format!("invalid fullmove number: {fullmove_part}"))
    })?);

    debug!("parsed FEN '{fen}'");
    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenForm(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                if file as u32 + empty_count > 8 {
                    return Err(ChessErrors::InvalidFenForm(format!(
                        "rank '{rank_str}' has too many files"
                    )));
                }
                file += empty_count as u8;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;

            if file >= 8 {
                return Err(ChessErrors::InvalidFenForm(format!(
                    "rank '{rank_str}' has too many files"
                )));
            }
            if position.piece_count(piece) == crate::game_state::chess_rules::MAX_PIECES_PER_KIND {
                return Err(ChessErrors::PieceListFull(piece));
            }

            position.set(square_at(file, board_rank), Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenForm(format!(
                "rank '{rank_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFenForm(format!(
            "invalid side-to-move: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;
    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CastlingRights::LIGHT_KINGSIDE,
            'Q' => CastlingRights::LIGHT_QUEENSIDE,
            'k' => CastlingRights::DARK_KINGSIDE,
            'q' => CastlingRights::DARK_QUEENSIDE,
            _ => return Err(ChessErrors::InvalidFenToken(ch)),
        };
    }
    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    match rank_of(square) {
        2 | 5 => Ok(Some(square)),
        _ => Err(ChessErrors::InvalidFenForm(format!(
            "en-passant square {en_passant_part} must be on rank 3 or 6"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_position() {
        let position = parse_fen(crate::game_state::chess_rules::STARTING_POSITION_FEN)
            .expect("starting FEN should parse");
        assert_eq!(position.get(4), Some(Piece::LightKing));
        assert_eq!(position.get(59), Some(Piece::DarkQueen));
        assert_eq!(position.side_to_move(), Color::Light);
        assert_eq!(position.castling_rights(), CastlingRights::ALL);
        assert_eq!(position.en_passant_square(), None);
        assert_eq!(position.fullmove_number(), 1);
    }

    #[test]
    fn parses_en_passant_and_clocks() {
        let position = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 3 12").expect("FEN should parse");
        assert_eq!(position.en_passant_square(), Some(20));
        assert_eq!(position.halfmove_clock(), 3);
        assert_eq!(position.fullmove_number(), 12);
        assert_eq!(position.side_to_move(), Color::Dark);
        assert_eq!(position.castling_rights(), CastlingRights::NONE);
    }

    #[test]
    fn rejects_malformed_fen() {
        assert!(matches!(
            parse_fen("8/8/8 w - - 0 1"),
            Err(ChessErrors::InvalidFenForm(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1"),
            Err(ChessErrors::InvalidFenToken('X'))
        ));
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - e4 0 1").is_err());

        let long_rank = format!("{}/8/8/8/8/8/8/8 w - - 0 1", "8".repeat(32));
        assert!(matches!(
            parse_fen(&long_rank),
            Err(ChessErrors::InvalidFenForm(_))
        ));
        assert!(matches!(
            parse_fen("4k4/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessErrors::InvalidFenForm(_))
        ));
    }

    #[test]
    fn too_many_pieces_of_one_kind_is_an_error() {
        assert!(matches!(
            parse_fen("QQQQQQQQ/QQQ5/8/8/8/8/8/4K2k w - - 0 1"),
            Err(ChessErrors::PieceListFull(Piece::LightQueen))
        ));
    }
}
