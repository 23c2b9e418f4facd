//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting layout and the draw thresholds used by `Game`.

use crate::game_state::chess_types::{PieceKind, PromotionKind};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank order from the a-file to the h-file, shared by both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Order in which promotion moves are emitted.
pub const PROMOTION_KINDS: [PromotionKind; 4] = [
    PromotionKind::Queen,
    PromotionKind::Knight,
    PromotionKind::Rook,
    PromotionKind::Bishop,
];

/// Fifty-move rule, counted in half-moves. A game is drawn once the
/// no-progress counter reaches this value (100 half-moves, as FIDE counts
/// it), so comparisons against it use `>=`.
pub const NO_PROGRESS_HALF_MOVE_LIMIT: u16 = 100;
