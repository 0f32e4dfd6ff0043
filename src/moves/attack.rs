//! Attack reachability predicate.
//!
//! Answers whether a piece, sitting at its current square, attacks a target
//! square under current occupancy. Sliding attacks stop at the first
//! occupied square; a same-color occupant on the target is never attacked.
//! En passant and castling are move-generation concerns and never factor in
//! here.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::offsets::{
    pawn_capture_offsets, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

pub fn can_reach(position: &Position, piece: &Piece, target: Square) -> bool {
    if piece.square == target {
        return false;
    }
    if let Some(occupant) = position.piece_at(target) {
        if occupant.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Rook => slides_to(position, piece.square, target, &ROOK_DIRECTIONS),
        PieceKind::Bishop => slides_to(position, piece.square, target, &BISHOP_DIRECTIONS),
        PieceKind::Queen => {
            slides_to(position, piece.square, target, &ROOK_DIRECTIONS)
                || slides_to(position, piece.square, target, &BISHOP_DIRECTIONS)
        }
        PieceKind::Knight => offset_reaches(piece.square, target, &KNIGHT_OFFSETS),
        PieceKind::King => offset_reaches(piece.square, target, &KING_OFFSETS),
        PieceKind::Pawn => {
            offset_reaches(piece.square, target, &pawn_capture_offsets(piece.color))
        }
    }
}

fn slides_to(position: &Position, from: Square, target: Square, directions: &[(i8, i8)]) -> bool {
    for &(d_file, d_rank) in directions {
        let mut square = from;
        while let Some(next) = square.offset(d_file, d_rank) {
            if next == target {
                return true;
            }
            if position.is_occupied(next) {
                break;
            }
            square = next;
        }
    }
    false
}

#[inline]
fn offset_reaches(from: Square, target: Square, offsets: &[(i8, i8)]) -> bool {
    offsets
        .iter()
        .any(|&(d_file, d_rank)| from.offset(d_file, d_rank) == Some(target))
}
