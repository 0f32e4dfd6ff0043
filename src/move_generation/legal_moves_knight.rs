//! Knight pseudo-move generation.

use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::offset_moves;
use crate::moves::offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(position: &Position, piece: &Piece, out: &mut Vec<Square>) {
    offset_moves(position, piece, &KNIGHT_OFFSETS, out);
}
