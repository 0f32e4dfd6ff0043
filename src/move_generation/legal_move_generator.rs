//! Full legal-move pipeline for one piece.
//!
//! Generates pseudo destinations per piece kind, then filters by simulating
//! each candidate on a scratch position (an undo-log of the touched squares,
//! not a per-candidate deep clone) and re-testing check. The same filter
//! uniformly enforces pins, check evasion, and king safety. Castling
//! candidates are appended last and only while not in check.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Destinations obeying piece geometry alone; own-king exposure is not yet
/// considered.
pub fn pseudo_moves(
    position: &Position,
    piece: &Piece,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, piece, en_passant_target, &mut out),
        PieceKind::Knight => generate_knight_moves(position, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(position, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(position, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(position, piece, &mut out),
        PieceKind::King => generate_king_moves(position, piece, &mut out),
    }
    out
}

/// The full legal destination set for `piece`.
///
/// # Panics
///
/// Panics when the side to move has no king (invariant violation).
pub fn legal_moves(
    position: &Position,
    piece: &Piece,
    turn: Color,
    en_passant_target: Option<Square>,
    in_check: bool,
) -> Vec<Square> {
    if piece.color != turn {
        return Vec::new();
    }

    let mut scratch = position.clone();
    let mut legal: Vec<Square> = pseudo_moves(position, piece, en_passant_target)
        .into_iter()
        .filter(|&target| move_keeps_king_safe(&mut scratch, piece, target, en_passant_target))
        .collect();

    if piece.kind == PieceKind::King && !in_check {
        generate_castle_moves(position, piece, &mut legal);
    }

    legal
}

/// Simulate `piece` landing on `target` and report whether the own king is
/// left unattacked. The scratch position is restored before returning.
fn move_keeps_king_safe(
    scratch: &mut Position,
    piece: &Piece,
    target: Square,
    en_passant_target: Option<Square>,
) -> bool {
    let captured = scratch.remove(target);
    let en_passant_victim =
        if piece.kind == PieceKind::Pawn && captured.is_none() && en_passant_target == Some(target) {
            scratch.remove(Square::new(target.file, piece.square.rank))
        } else {
            None
        };

    scratch.remove(piece.square);
    scratch.insert(piece.moved_to(target));

    let safe = !is_king_in_check(scratch, piece.color);

    scratch.remove(target);
    scratch.insert(*piece);
    if let Some(restored) = captured {
        scratch.insert(restored);
    }
    if let Some(restored) = en_passant_victim {
        scratch.insert(restored);
    }

    safe
}
