//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals: the back-rank piece
//! arrangement and the castling file geometry used by move generation and
//! history replay.

use crate::game_state::chess_types::{CastleSide, PieceKind};

/// Back-rank piece kinds for both colors, indexed by file (`1..=8` maps to
/// `0..=7`).
pub const BACK_RANK_KINDS: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// File the king stands on before castling.
pub const KING_FILE: u8 = 5;

/// Rook start and destination files per castle side.
#[inline]
pub const fn castle_rook_files(side: CastleSide) -> (u8, u8) {
    match side {
        CastleSide::Short => (8, 6),
        CastleSide::Long => (1, 4),
    }
}

/// King destination file per castle side.
#[inline]
pub const fn castle_king_file(side: CastleSide) -> u8 {
    match side {
        CastleSide::Short => 7,
        CastleSide::Long => 3,
    }
}
