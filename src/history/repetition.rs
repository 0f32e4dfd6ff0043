//! Position-repetition bookkeeping.
//!
//! Signatures are FEN-flavored strings over board occupancy, side to move,
//! castling rights, and en-passant file: stable within a process run and
//! collision-free for equal positions. Recording is keyed by ply through a
//! signature log parallel to the move history, so amending a ply
//! (promotion) or truncating the future (branching) adjusts each count
//! exactly once.

use std::collections::HashMap;

use crate::game_state::chess_rules::KING_FILE;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::utils::algebraic::file_letter;

/// Canonical signature of a position with `turn` to move.
pub fn position_signature(
    position: &Position,
    turn: Color,
    en_passant_target: Option<Square>,
) -> String {
    let mut out = String::with_capacity(80);

    for rank in (1..=8).rev() {
        let mut empty_run = 0u8;
        for file in 1..=8 {
            match position.piece_at(Square::new(file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_signature_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 1 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match turn {
        Color::Light => 'w',
        Color::Dark => 'b',
    });
    out.push(' ');
    out.push_str(&castling_field(position));
    out.push(' ');
    match en_passant_target {
        Some(square) => out.push(file_letter(square.file)),
        None => out.push('-'),
    }

    out
}

fn piece_signature_char(piece: &Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}

/// Castling rights derived from the `has_moved` flags of kings and corner
/// rooks, rendered FEN-style.
fn castling_field(position: &Position) -> String {
    let mut out = String::new();

    for (color, short_ch, long_ch) in [(Color::Light, 'K', 'Q'), (Color::Dark, 'k', 'q')] {
        let rank = color.back_rank();
        let king_ok = position
            .piece_at(Square::new(KING_FILE, rank))
            .is_some_and(|p| p.kind == PieceKind::King && p.color == color && !p.has_moved);
        if !king_ok {
            continue;
        }
        if virgin_rook_at(position, color, Square::new(8, rank)) {
            out.push(short_ch);
        }
        if virgin_rook_at(position, color, Square::new(1, rank)) {
            out.push(long_ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn virgin_rook_at(position: &Position, color: Color, square: Square) -> bool {
    position
        .piece_at(square)
        .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color && !p.has_moved)
}

/// Occurrence counts backed by a per-ply signature log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionTable {
    counts: HashMap<String, u32>,
    by_ply: Vec<String>,
}

impl RepetitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the signature reached after the next ply; returns its new
    /// occurrence count.
    pub fn record(&mut self, signature: String) -> u32 {
        let count = self.counts.entry(signature.clone()).or_insert(0);
        *count += 1;
        let reached = *count;
        self.by_ply.push(signature);
        reached
    }

    /// Replace the last recorded ply's signature (a promotion committing to
    /// the same ply); returns the new signature's occurrence count.
    pub fn amend_last(&mut self, signature: String) -> u32 {
        if let Some(old) = self.by_ply.pop() {
            self.decrement(&old);
        }
        self.record(signature)
    }

    /// Roll back to the first `len` recorded plies (branching away a
    /// discarded future).
    pub fn truncate(&mut self, len: usize) {
        while self.by_ply.len() > len {
            if let Some(old) = self.by_ply.pop() {
                self.decrement(&old);
            }
        }
    }

    pub fn count(&self, signature: &str) -> u32 {
        self.counts.get(signature).copied().unwrap_or(0)
    }

    fn decrement(&mut self, signature: &str) {
        if let Some(count) = self.counts.get_mut(signature) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(signature);
            }
        }
    }
}
