//! King pseudo-move and castling-candidate generation.
//!
//! Castling is gated entirely against the pre-move position: virgin king and
//! rook, empty squares between them, and no attack on the king's start,
//! transit, or destination square.

use crate::game_state::chess_rules::{castle_king_file, castle_rook_files, KING_FILE};
use crate::game_state::chess_types::{CastleSide, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::offset_moves;
use crate::moves::offsets::KING_OFFSETS;

pub fn generate_king_moves(position: &Position, piece: &Piece, out: &mut Vec<Square>) {
    offset_moves(position, piece, &KING_OFFSETS, out);
}

/// Append the castling destinations available to `king` in the current
/// position. Callers must not invoke this while the king is in check.
pub fn generate_castle_moves(position: &Position, king: &Piece, out: &mut Vec<Square>) {
    if king.has_moved || king.square != Square::new(KING_FILE, king.color.back_rank()) {
        return;
    }

    let enemy = king.color.opposite();
    if is_square_attacked(position, king.square, enemy) {
        return;
    }

    for side in [CastleSide::Short, CastleSide::Long] {
        if castle_side_available(position, king, side) {
            out.push(Square::new(castle_king_file(side), king.square.rank));
        }
    }
}

fn castle_side_available(position: &Position, king: &Piece, side: CastleSide) -> bool {
    let rank = king.square.rank;
    let (rook_file, _) = castle_rook_files(side);

    let rook_ok = position
        .piece_at(Square::new(rook_file, rank))
        .is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        });
    if !rook_ok {
        return false;
    }

    // Every square strictly between king and rook must be empty.
    let (low, high) = if rook_file > KING_FILE {
        (KING_FILE + 1, rook_file - 1)
    } else {
        (rook_file + 1, KING_FILE - 1)
    };
    for file in low..=high {
        if position.is_occupied(Square::new(file, rank)) {
            return false;
        }
    }

    // The king may not pass through or land on an attacked square.
    let enemy = king.color.opposite();
    let destination = castle_king_file(side);
    let transit = (KING_FILE + destination) / 2;
    for file in [transit, destination] {
        if is_square_attacked(position, Square::new(file, rank), enemy) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::{generate_castle_moves, generate_king_moves};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::position::Position;

    fn castle_ready_position() -> (Position, Piece) {
        let mut position = Position::empty();
        let king = Piece::new(PieceKind::King, Color::Light, Square::new(5, 1));
        position.insert(king);
        position.insert(Piece::new(PieceKind::Rook, Color::Light, Square::new(8, 1)));
        position.insert(Piece::new(PieceKind::Rook, Color::Light, Square::new(1, 1)));
        position.insert(Piece::new(PieceKind::King, Color::Dark, Square::new(5, 8)));
        (position, king)
    }

    #[test]
    fn centered_king_steps_to_eight_squares() {
        let mut position = Position::empty();
        let king = Piece::new(PieceKind::King, Color::Light, Square::new(4, 4));
        position.insert(king);

        let mut out = Vec::new();
        generate_king_moves(&position, &king, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn both_castles_offered_on_a_clear_back_rank() {
        let (position, king) = castle_ready_position();
        let mut out = Vec::new();
        generate_castle_moves(&position, &king, &mut out);
        assert_eq!(out, vec![Square::new(7, 1), Square::new(3, 1)]);
    }

    #[test]
    fn moved_rook_disables_its_wing_only() {
        let (mut position, king) = castle_ready_position();
        let rook = position.remove(Square::new(8, 1)).expect("h1 rook");
        position.insert(Piece {
            has_moved: true,
            ..rook
        });

        let mut out = Vec::new();
        generate_castle_moves(&position, &king, &mut out);
        assert_eq!(out, vec![Square::new(3, 1)]);
    }

    #[test]
    fn moved_king_disables_both_wings() {
        let (mut position, king) = castle_ready_position();
        position.remove(king.square);
        let stale_king = Piece {
            has_moved: true,
            ..king
        };
        position.insert(stale_king);

        let mut out = Vec::new();
        generate_castle_moves(&position, &stale_king, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn occupied_between_square_blocks_castling() {
        let (mut position, king) = castle_ready_position();
        position.insert(Piece::new(PieceKind::Knight, Color::Light, Square::new(2, 1)));

        let mut out = Vec::new();
        generate_castle_moves(&position, &king, &mut out);
        assert_eq!(out, vec![Square::new(7, 1)]);
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        let (mut position, king) = castle_ready_position();
        // Dark rook eyeing f1: short castling passes through an attack.
        position.insert(Piece::new(PieceKind::Rook, Color::Dark, Square::new(6, 8)));

        let mut out = Vec::new();
        generate_castle_moves(&position, &king, &mut out);
        assert_eq!(out, vec![Square::new(3, 1)]);
    }

    #[test]
    fn checked_king_gets_no_castle_candidates() {
        let (mut position, king) = castle_ready_position();
        position.insert(Piece::new(PieceKind::Rook, Color::Dark, Square::new(5, 5)));

        let mut out = Vec::new();
        generate_castle_moves(&position, &king, &mut out);
        assert!(out.is_empty());
    }
}
