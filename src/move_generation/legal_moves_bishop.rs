//! Bishop pseudo-move generation.

use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::slide_moves;
use crate::moves::offsets::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(position: &Position, piece: &Piece, out: &mut Vec<Square>) {
    slide_moves(position, piece, &BISHOP_DIRECTIONS, out);
}
