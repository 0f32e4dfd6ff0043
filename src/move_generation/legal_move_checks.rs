//! Check detection over the sparse position map.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::moves::attack::can_reach;

/// True iff any piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    position
        .pieces_of(attacker_color)
        .any(|piece| can_reach(position, piece, square))
}

/// True iff the king of `color` stands attacked.
///
/// # Panics
///
/// Panics when the position holds no king of `color` (invariant violation).
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let king = position.king_of(color);
    is_square_attacked(position, king.square, color.opposite())
}
