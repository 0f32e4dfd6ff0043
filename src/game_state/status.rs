//! Game-status classification for the side to move.

use crate::game_state::chess_types::{Color, GameStatus, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::legal_moves;

/// Classify the position with `turn` to move; also reports the checked
/// king's square for the host to highlight.
///
/// Threefold repetition is not decided here: the game controller overlays it
/// from the repetition table, since it depends on history rather than on the
/// position alone.
///
/// # Panics
///
/// Panics when the side to move has no king (invariant violation).
pub fn evaluate_game_status(
    position: &Position,
    turn: Color,
    en_passant_target: Option<Square>,
) -> (GameStatus, Option<Square>) {
    let king = position.king_of(turn);
    let in_check = is_square_attacked(position, king.square, turn.opposite());

    let has_any_move = position.pieces_of(turn).any(|piece| {
        !legal_moves(position, piece, turn, en_passant_target, in_check).is_empty()
    });

    let status = if !has_any_move {
        if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    } else if position.len() == 2 {
        // Two pieces can only be the two kings: insufficient material.
        GameStatus::Draw
    } else if in_check {
        GameStatus::Check
    } else {
        GameStatus::Playing
    };

    (status, in_check.then_some(king.square))
}
