//! Queen pseudo-move generation: the union of rook and bishop rays.

use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::slide_moves;
use crate::moves::offsets::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

pub fn generate_queen_moves(position: &Position, piece: &Piece, out: &mut Vec<Square>) {
    slide_moves(position, piece, &ROOK_DIRECTIONS, out);
    slide_moves(position, piece, &BISHOP_DIRECTIONS, out);
}
