//! Sparse board container keyed by square.
//!
//! `Position` is the authoritative occupancy map: at most one piece per
//! square, pieces stored as immutable records keyed by their own coordinates.

use std::collections::HashMap;

use crate::game_state::chess_rules::BACK_RANK_KINDS;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    pieces: HashMap<Square, Piece>,
}

impl Position {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard initial arrangement: pawns on ranks 2 and 7, the back
    /// ranks per [`BACK_RANK_KINDS`].
    pub fn starting() -> Self {
        let mut position = Self::empty();
        for file in 1..=8 {
            position.insert(Piece::new(PieceKind::Pawn, Color::Light, Square::new(file, 2)));
            position.insert(Piece::new(PieceKind::Pawn, Color::Dark, Square::new(file, 7)));

            let kind = BACK_RANK_KINDS[file as usize - 1];
            position.insert(Piece::new(kind, Color::Light, Square::new(file, 1)));
            position.insert(Piece::new(kind, Color::Dark, Square::new(file, 8)));
        }
        position
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.pieces.contains_key(&square)
    }

    /// Insert `piece` keyed by its own coordinates, replacing any occupant.
    #[inline]
    pub fn insert(&mut self, piece: Piece) {
        self.pieces.insert(piece.square, piece);
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.pieces.remove(&square)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.values().filter(move |piece| piece.color == color)
    }

    /// The king of `color`.
    ///
    /// # Panics
    ///
    /// Panics when no such king exists: a kingless position is a defect in
    /// the state machine, not a recoverable game situation.
    pub fn king_of(&self, color: Color) -> Piece {
        *self
            .pieces
            .values()
            .find(|piece| piece.color == color && piece.kind == PieceKind::King)
            .unwrap_or_else(|| panic!("{color} king is missing from the position"))
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn starting_position_has_standard_arrangement() {
        let position = Position::starting();
        assert_eq!(position.len(), 32);
        assert_eq!(position.pieces_of(Color::Light).count(), 16);
        assert_eq!(position.pieces_of(Color::Dark).count(), 16);

        let light_king = position.king_of(Color::Light);
        assert_eq!(light_king.square, Square::new(5, 1));
        assert!(!light_king.has_moved);

        let dark_queen = position
            .piece_at(Square::new(4, 8))
            .expect("d8 should hold the dark queen");
        assert_eq!(dark_queen.kind, PieceKind::Queen);
        assert_eq!(dark_queen.color, Color::Dark);
    }

    #[test]
    fn insert_then_remove_round_trips() {
        let mut position = Position::empty();
        let rook = Piece::new(PieceKind::Rook, Color::Light, Square::new(1, 1));
        position.insert(rook);
        assert!(position.is_occupied(rook.square));
        assert_eq!(position.remove(rook.square), Some(rook));
        assert!(position.is_empty());
    }

    #[test]
    #[should_panic(expected = "light king is missing")]
    fn missing_king_is_fatal() {
        Position::empty().king_of(Color::Light);
    }
}
