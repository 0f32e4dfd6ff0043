//! Helpers shared by the per-piece pseudo-move generators.

use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::position::Position;

/// Walk each sliding direction outward from the piece, collecting empty
/// squares and the first enemy-occupied square; own pieces and anything
/// behind a blocker are excluded.
pub fn slide_moves(
    position: &Position,
    piece: &Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_file, d_rank) in directions {
        let mut square = piece.square;
        while let Some(next) = square.offset(d_file, d_rank) {
            match position.piece_at(next) {
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(next);
                    }
                    break;
                }
                None => out.push(next),
            }
            square = next;
        }
    }
}

/// Collect every fixed-offset destination that stays on the board and is not
/// occupied by an own piece.
pub fn offset_moves(
    position: &Position,
    piece: &Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_file, d_rank) in offsets {
        let Some(target) = piece.square.offset(d_file, d_rank) else {
            continue;
        };
        match position.piece_at(target) {
            Some(occupant) if occupant.color == piece.color => {}
            _ => out.push(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{offset_moves, slide_moves};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::position::Position;
    use crate::moves::offsets::{KNIGHT_OFFSETS, ROOK_DIRECTIONS};

    #[test]
    fn slide_moves_collect_up_to_first_blocker() {
        let mut position = Position::empty();
        let rook = Piece::new(PieceKind::Rook, Color::Light, Square::new(1, 1));
        position.insert(rook);
        position.insert(Piece::new(PieceKind::Pawn, Color::Dark, Square::new(1, 3)));
        position.insert(Piece::new(PieceKind::Pawn, Color::Light, Square::new(3, 1)));

        let mut out = Vec::new();
        slide_moves(&position, &rook, &ROOK_DIRECTIONS, &mut out);

        assert!(out.contains(&Square::new(1, 2)));
        assert!(out.contains(&Square::new(1, 3)), "enemy blocker is capturable");
        assert!(!out.contains(&Square::new(1, 4)), "no sliding through a piece");
        assert!(out.contains(&Square::new(2, 1)));
        assert!(!out.contains(&Square::new(3, 1)), "own piece blocks the ray");
    }

    #[test]
    fn offset_moves_filter_edges_and_own_pieces() {
        let mut position = Position::empty();
        let knight = Piece::new(PieceKind::Knight, Color::Light, Square::new(1, 1));
        position.insert(knight);
        position.insert(Piece::new(PieceKind::Pawn, Color::Light, Square::new(3, 2)));

        let mut out = Vec::new();
        offset_moves(&position, &knight, &KNIGHT_OFFSETS, &mut out);

        assert_eq!(out, vec![Square::new(2, 3)]);
    }
}
