//! Short-algebraic rendering of recorded moves.
//!
//! Uses the disambiguation flags captured at move time, so naming a history
//! entry never needs to re-derive move generation.

use crate::game_state::chess_types::{CastleSide, Move, PieceKind, PromotionKind};
use crate::utils::algebraic::{file_letter, square_to_algebraic};

/// Render a recorded move: `e4`, `dxe5`, `a8=Q`, `O-O`, `Nbd2`, `R1a3`,
/// with a trailing `+` when the move gave check.
pub fn move_name(mv: &Move) -> String {
    let mut out = match mv.piece.kind {
        PieceKind::Pawn => pawn_move_name(mv),
        PieceKind::King => king_move_name(mv),
        kind => {
            let mut text = String::new();
            text.push(kind_letter(kind));
            if mv.include_file {
                text.push(file_letter(mv.from.file));
            }
            if mv.include_rank {
                text.push(char::from(b'0' + mv.from.rank));
            }
            if mv.captured.is_some() {
                text.push('x');
            }
            text.push_str(&square_to_algebraic(mv.to));
            text
        }
    };

    if mv.is_check {
        out.push('+');
    }
    out
}

fn pawn_move_name(mv: &Move) -> String {
    let mut text = String::new();
    if mv.captured.is_some() {
        text.push(file_letter(mv.from.file));
        text.push('x');
    }
    text.push_str(&square_to_algebraic(mv.to));
    if let Some(promotion) = mv.promotion {
        text.push('=');
        text.push(promotion_letter(promotion));
    }
    text
}

fn king_move_name(mv: &Move) -> String {
    match mv.castle {
        Some(CastleSide::Short) => "O-O".to_owned(),
        Some(CastleSide::Long) => "O-O-O".to_owned(),
        None => {
            let mut text = String::from('K');
            if mv.captured.is_some() {
                text.push('x');
            }
            text.push_str(&square_to_algebraic(mv.to));
            text
        }
    }
}

fn kind_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'P',
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Rook => 'R',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
    }
}

fn promotion_letter(promotion: PromotionKind) -> char {
    match promotion {
        PromotionKind::Queen => 'Q',
        PromotionKind::Rook => 'R',
        PromotionKind::Bishop => 'B',
        PromotionKind::Knight => 'N',
    }
}
