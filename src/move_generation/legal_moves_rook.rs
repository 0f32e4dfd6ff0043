//! Rook pseudo-move generation.

use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::slide_moves;
use crate::moves::offsets::ROOK_DIRECTIONS;

pub fn generate_rook_moves(position: &Position, piece: &Piece, out: &mut Vec<Square>) {
    slide_moves(position, piece, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::position::Position;

    #[test]
    fn lone_rook_sweeps_rank_and_file() {
        let mut position = Position::empty();
        let rook = Piece::new(PieceKind::Rook, Color::Dark, Square::new(4, 4));
        position.insert(rook);

        let mut out = Vec::new();
        generate_rook_moves(&position, &rook, &mut out);
        assert_eq!(out.len(), 14);
    }
}
