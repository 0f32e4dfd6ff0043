//! Recorded-move side effects and deterministic history replay.
//!
//! The history log is the single source of truth for time travel: replaying
//! a prefix of recorded moves from the canonical initial position always
//! reproduces the position as it stood after that ply, including capture,
//! castling, and promotion side effects.

use crate::errors::ChessError;
use crate::game_state::chess_rules::castle_rook_files;
use crate::game_state::chess_types::{CastleSide, Color, Move, Square};
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

/// Relocate the castling rook for `side` from its corner to the far side of
/// the king, marking it moved.
pub fn shift_castle_rook(
    position: &mut Position,
    color: Color,
    side: CastleSide,
) -> Result<(), ChessError> {
    let rank = color.back_rank();
    let (from_file, to_file) = castle_rook_files(side);
    let rook = position.remove(Square::new(from_file, rank)).ok_or_else(|| {
        ChessError::InconsistentHistory(format!(
            "no rook on {} to complete castling",
            square_to_algebraic(Square::new(from_file, rank))
        ))
    })?;
    position.insert(rook.moved_to(Square::new(to_file, rank)));
    Ok(())
}

/// Re-apply one recorded move to `position`: remove the captured piece (its
/// recorded square covers the en-passant case), relocate the castling rook,
/// then relocate the mover, rewriting it to the promoted kind when the
/// record carries one.
pub fn apply_recorded_move(position: &mut Position, mv: &Move) -> Result<(), ChessError> {
    if let Some(captured) = mv.captured {
        position.remove(captured.square);
    }

    if let Some(side) = mv.castle {
        shift_castle_rook(position, mv.piece.color, side)?;
    }

    let mover = position.remove(mv.from).ok_or_else(|| {
        ChessError::InconsistentHistory(format!(
            "no piece on {} to replay",
            square_to_algebraic(mv.from)
        ))
    })?;

    let mut moved = mover.moved_to(mv.to);
    if let Some(promotion) = mv.promotion {
        moved = moved.promoted_to(promotion);
    }
    position.insert(moved);

    Ok(())
}

/// Replay the first `count` recorded moves from the canonical initial
/// position. Pure and idempotent: the same prefix always yields the same
/// position.
pub fn reconstruct_at(history: &[Move], count: usize) -> Result<Position, ChessError> {
    let mut position = Position::starting();
    for mv in &history[..count] {
        apply_recorded_move(&mut position, mv)?;
    }
    Ok(position)
}
