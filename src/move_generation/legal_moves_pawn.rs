//! Pawn pseudo-move generation.
//!
//! Forward pushes are blocked by any occupant, diagonal captures require an
//! enemy occupant, the double push needs a virgin pawn and two empty squares,
//! and the en-passant destination is offered only while the target is set.

use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::position::Position;

pub fn generate_pawn_moves(
    position: &Position,
    piece: &Piece,
    en_passant_target: Option<Square>,
    out: &mut Vec<Square>,
) {
    let advance = piece.color.pawn_advance();

    if let Some(front) = piece.square.offset(0, advance) {
        if !position.is_occupied(front) {
            out.push(front);

            if !piece.has_moved {
                if let Some(two_ahead) = front.offset(0, advance) {
                    if !position.is_occupied(two_ahead) {
                        out.push(two_ahead);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(diagonal) = piece.square.offset(d_file, advance) else {
            continue;
        };
        match position.piece_at(diagonal) {
            Some(occupant) if occupant.color != piece.color => out.push(diagonal),
            Some(_) => {}
            None => {
                if en_passant_target == Some(diagonal) {
                    out.push(diagonal);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::position::Position;

    fn pawn(color: Color, file: u8, rank: u8) -> Piece {
        Piece::new(PieceKind::Pawn, color, Square::new(file, rank))
    }

    #[test]
    fn virgin_pawn_gets_single_and_double_push() {
        let mut position = Position::empty();
        let e2 = pawn(Color::Light, 5, 2);
        position.insert(e2);

        let mut out = Vec::new();
        generate_pawn_moves(&position, &e2, None, &mut out);
        assert_eq!(out, vec![Square::new(5, 3), Square::new(5, 4)]);
    }

    #[test]
    fn moved_pawn_loses_the_double_push() {
        let mut position = Position::empty();
        let e3 = pawn(Color::Light, 5, 2).moved_to(Square::new(5, 3));
        position.insert(e3);

        let mut out = Vec::new();
        generate_pawn_moves(&position, &e3, None, &mut out);
        assert_eq!(out, vec![Square::new(5, 4)]);
    }

    #[test]
    fn any_occupant_blocks_the_push() {
        let mut position = Position::empty();
        let e2 = pawn(Color::Light, 5, 2);
        position.insert(e2);
        position.insert(pawn(Color::Dark, 5, 3));

        let mut out = Vec::new();
        generate_pawn_moves(&position, &e2, None, &mut out);
        assert!(out.is_empty(), "a blocked pawn cannot push or jump");
    }

    #[test]
    fn blocked_far_square_cancels_only_the_double_push() {
        let mut position = Position::empty();
        let e2 = pawn(Color::Light, 5, 2);
        position.insert(e2);
        position.insert(pawn(Color::Dark, 5, 4));

        let mut out = Vec::new();
        generate_pawn_moves(&position, &e2, None, &mut out);
        assert_eq!(out, vec![Square::new(5, 3)]);
    }

    #[test]
    fn captures_require_an_enemy_occupant() {
        let mut position = Position::empty();
        let d4 = pawn(Color::Light, 4, 4);
        position.insert(d4);
        position.insert(pawn(Color::Dark, 3, 5));
        position.insert(pawn(Color::Light, 5, 5));

        let mut out = Vec::new();
        generate_pawn_moves(&position, &d4, None, &mut out);
        assert!(out.contains(&Square::new(3, 5)));
        assert!(!out.contains(&Square::new(5, 5)));
    }

    #[test]
    fn en_passant_destination_is_offered_while_target_is_set() {
        let mut position = Position::empty();
        let e5 = pawn(Color::Light, 5, 2).moved_to(Square::new(5, 5));
        let d5 = pawn(Color::Dark, 4, 7).moved_to(Square::new(4, 5));
        position.insert(e5);
        position.insert(d5);

        let target = Square::new(4, 6);
        let mut out = Vec::new();
        generate_pawn_moves(&position, &e5, Some(target), &mut out);
        assert!(out.contains(&target));

        out.clear();
        generate_pawn_moves(&position, &e5, None, &mut out);
        assert!(!out.contains(&target));
    }

    #[test]
    fn dark_pawns_advance_down_the_board() {
        let mut position = Position::empty();
        let e7 = pawn(Color::Dark, 5, 7);
        position.insert(e7);

        let mut out = Vec::new();
        generate_pawn_moves(&position, &e7, None, &mut out);
        assert_eq!(out, vec![Square::new(5, 6), Square::new(5, 5)]);
    }
}
