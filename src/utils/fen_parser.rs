//! FEN-to-Game parser.
//!
//! Builds a `Game` from a Forsyth-Edwards Notation string: placement, side to
//! move, castling rights, en-passant target and the halfmove clock, which
//! seeds the no-progress counter. The fullmove number is validated but not
//! stored.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Game, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut board = Board::new_empty();
    parse_board(board_part, &mut board)?;
    let side_to_move = parse_side_to_move(side_part)?;
    board.set_castling_rights(parse_castling_rights(castling_part)?);
    board.set_en_passant_target(parse_en_passant_pawn(en_passant_part, &board, side_to_move)?)?;

    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("halfmove clock {halfmove_part}")))?;
    fullmove_part
        .parse::<u16>()
        .ok()
        .filter(|&number| number >= 1)
        .ok_or_else(|| invalid(&format!("fullmove number {fullmove_part}")))?;

    let mut game = Game::from_board(board, side_to_move);
    game.no_progress_counter = halfmove_clock;
    Ok(game)
}

fn invalid(detail: &str) -> ChessErrors {
    ChessErrors::InvalidFen(detail.to_owned())
}

/// FEN lists the eighth rank first, which is rank index 0 here.
fn parse_board(board_part: &str, board: &mut Board) -> Result<(), ChessErrors> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (rank, row) in (0i8..).zip(rows) {
        let mut file = 0i8;

        for ch in row.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                if file + empty_count as i8 > 8 {
                    return Err(invalid(&format!("rank {} has too many files", 8 - rank)));
                }
                file += empty_count as i8;
                continue;
            }

            let (owner, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;
            if file >= 8 {
                return Err(invalid(&format!("rank {} has too many files", 8 - rank)));
            }

            let mut piece = Piece::new(owner, kind, Square::new(file, rank));
            if kind == PieceKind::Pawn {
                piece.first_move = rank == owner.pawn_start_rank();
            }
            board.place_piece(piece)?;
            file += 1;
        }

        if file != 8 {
            return Err(invalid(&format!("rank {} does not sum to 8 files", 8 - rank)));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("side-to-move field {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        };
    }

    Ok(rights)
}

/// FEN names the skipped square; the board tracks the pawn that skipped it.
fn parse_en_passant_pawn(
    en_passant_part: &str,
    board: &Board,
    side_to_move: Color,
) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let pusher = side_to_move.opposite();
    let skipped = algebraic_to_square(en_passant_part)?;
    if skipped.rank != pusher.pawn_start_rank() + pusher.pawn_direction() {
        return Err(invalid(&format!("en-passant square {en_passant_part}")));
    }

    let pawn_square = skipped.offset(0, pusher.pawn_direction());
    match board.get_piece_at_position(pawn_square) {
        Some(pawn) if pawn.kind == PieceKind::Pawn && pawn.owner == pusher => Ok(Some(pawn_square)),
        _ => Err(invalid(&format!("no pawn behind en-passant square {en_passant_part}"))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let owner = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((owner, kind))
}
