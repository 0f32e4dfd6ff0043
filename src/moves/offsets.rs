//! Fixed movement geometry shared by the attack predicate and move
//! generation. All offsets are `(d_file, d_rank)` pairs.

use crate::game_state::chess_types::Color;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (-2, 1),
    (2, 1),
    (-2, -1),
    (2, -1),
    (-1, -2),
    (1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The two forward diagonals a pawn of `color` attacks. Pawns never attack
/// straight ahead.
#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [(i8, i8); 2] {
    let advance = color.pawn_advance();
    [(-1, advance), (1, advance)]
}

#[cfg(test)]
mod tests {
    use super::{pawn_capture_offsets, KING_OFFSETS, KNIGHT_OFFSETS};
    use crate::game_state::chess_types::Color;

    #[test]
    fn offset_tables_have_no_duplicates() {
        for table in [&KNIGHT_OFFSETS, &KING_OFFSETS] {
            for (i, a) in table.iter().enumerate() {
                assert!(!table[i + 1..].contains(a), "duplicate offset {a:?}");
            }
        }
    }

    #[test]
    fn pawn_capture_offsets_point_forward() {
        assert_eq!(pawn_capture_offsets(Color::Light), [(-1, 1), (1, 1)]);
        assert_eq!(pawn_capture_offsets(Color::Dark), [(-1, -1), (1, -1)]);
    }
}
