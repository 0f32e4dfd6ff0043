//! Authoritative game state and the host-facing operations.
//!
//! `GameState` is an immutable value: every operation takes `&self` and
//! returns the successor state, so historical snapshots stay reachable by
//! replaying the history log. Invalid user intent (wrong-turn selections,
//! stale targets, out-of-range ply indices) returns the state unchanged;
//! only broken invariants such as a missing king panic.

use crate::game_state::chess_types::{
    CastleSide, Color, GameStatus, Move, Piece, PieceKind, PromotionKind, Square,
};
use crate::game_state::position::Position;
use crate::game_state::status::evaluate_game_status;
use crate::history::move_log::{reconstruct_at, shift_castle_rook};
use crate::history::repetition::{position_signature, RepetitionTable};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::legal_moves;

/// Occurrences of one signature that end the game by repetition.
pub const THREEFOLD_COUNT: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub position: Position,
    pub turn: Color,
    pub selected_piece: Option<Piece>,
    /// Cached legal destinations for `selected_piece`.
    pub legal_moves: Vec<Square>,
    pub history: Vec<Move>,
    pub status: GameStatus,
    pub en_passant_target: Option<Square>,
    pub promotion_pending: bool,
    pub king_in_check: Option<Square>,
    /// `Some(n)`: viewing the position after the first `n` plies (read-only
    /// time travel). `None`: live.
    pub focused_ply: Option<usize>,
    pub repetitions: RepetitionTable,
}

impl GameState {
    pub fn new_game() -> Self {
        Self {
            position: Position::starting(),
            turn: Color::Light,
            selected_piece: None,
            legal_moves: Vec::new(),
            history: Vec::new(),
            status: GameStatus::Playing,
            en_passant_target: None,
            promotion_pending: false,
            king_in_check: None,
            focused_ply: None,
            repetitions: RepetitionTable::new(),
        }
    }

    /// Discard everything and start over from the initial position.
    pub fn restart(&self) -> Self {
        Self::new_game()
    }

    #[inline]
    fn in_check(&self) -> bool {
        matches!(self.status, GameStatus::Check)
    }

    /// Select `piece` (or clear the selection with `None`) and cache its
    /// legal destinations. No-op while time traveling, after the game ended,
    /// while a promotion is pending, for opponent pieces, and for records
    /// that do not match the board.
    pub fn select_piece(&self, piece: Option<Piece>) -> Self {
        let mut next = self.clone();
        let Some(piece) = piece else {
            next.selected_piece = None;
            next.legal_moves = Vec::new();
            return next;
        };

        if self.focused_ply.is_some()
            || self.status.is_terminal()
            || self.promotion_pending
            || piece.color != self.turn
            || self.position.piece_at(piece.square) != Some(&piece)
        {
            return next;
        }

        next.legal_moves = legal_moves(
            &self.position,
            &piece,
            self.turn,
            self.en_passant_target,
            self.in_check(),
        );
        next.selected_piece = Some(piece);
        next
    }

    /// Move the selected piece to `target`. No-op unless a piece of the side
    /// to move is selected and `target` is among its cached legal
    /// destinations. Issued while time traveling, the move first branches:
    /// the future is discarded and the move is validated against the
    /// truncated state.
    pub fn move_piece(&self, target: Square) -> Self {
        if self.status.is_terminal() || self.promotion_pending {
            return self.clone();
        }
        let Some(piece) = self.selected_piece else {
            return self.clone();
        };
        if piece.square == target {
            return self.clone();
        }

        if let Some(count) = self.focused_ply {
            let base = self.branch_to(count);
            if base.status.is_terminal()
                || piece.color != base.turn
                || base.position.piece_at(piece.square) != Some(&piece)
            {
                return self.clone();
            }
            let moves = legal_moves(
                &base.position,
                &piece,
                base.turn,
                base.en_passant_target,
                base.in_check(),
            );
            if !moves.contains(&target) {
                return self.clone();
            }
            return base.commit_move(piece, target);
        }

        if piece.color != self.turn || !self.legal_moves.contains(&target) {
            return self.clone();
        }
        self.commit_move(piece, target)
    }

    /// Resolve a pending promotion by rewriting the pawn on the last move's
    /// destination square. Commits to the same ply: the last history entry
    /// is amended, not appended to. No-op when nothing is pending.
    pub fn promote(&self, promotion: PromotionKind) -> Self {
        if !self.promotion_pending {
            return self.clone();
        }
        let Some(&last) = self.history.last() else {
            return self.clone();
        };
        if last.piece.kind != PieceKind::Pawn {
            return self.clone();
        }

        let mut position = self.position.clone();
        let Some(pawn) = position.remove(last.to) else {
            return self.clone();
        };
        position.insert(pawn.promoted_to(promotion));

        let opponent_king = position.king_of(pawn.color.opposite());
        let is_check = is_square_attacked(&position, opponent_king.square, pawn.color);

        let mut history = self.history.clone();
        if let Some(entry) = history.last_mut() {
            entry.promotion = Some(promotion);
            entry.is_check = is_check;
        }

        let mut repetitions = self.repetitions.clone();
        repetitions.amend_last(position_signature(&position, self.turn, self.en_passant_target));
        let (status, king_in_check) =
            classify(&position, self.turn, self.en_passant_target, &repetitions);

        Self {
            position,
            history,
            repetitions,
            selected_piece: None,
            legal_moves: Vec::new(),
            status,
            king_in_check,
            promotion_pending: false,
            ..self.clone()
        }
    }

    /// Focus the position as it stood after ply `index` (`-1` focuses the
    /// initial position). Read-only: history and the live position are
    /// untouched, and focusing the latest ply returns to live. Out-of-range
    /// indices are no-ops.
    pub fn goto_ply(&self, index: isize) -> Self {
        if index < -1 || index >= self.history.len() as isize {
            return self.clone();
        }

        let count = (index + 1) as usize;
        let mut next = self.clone();
        next.focused_ply = (count != self.history.len()).then_some(count);
        next
    }

    /// The position being viewed: the focused ply's reconstruction, or the
    /// live position.
    pub fn viewed_position(&self) -> Position {
        match self.focused_ply {
            Some(count) => reconstruct_at(&self.history, count)
                .expect("recorded history should replay cleanly"),
            None => self.position.clone(),
        }
    }

    /// Truncate away everything after the first `count` plies and return to
    /// live, rebuilding the derived fields from the shortened history.
    fn branch_to(&self, count: usize) -> Self {
        let position = reconstruct_at(&self.history, count)
            .expect("recorded history should replay cleanly");

        let mut history = self.history.clone();
        history.truncate(count);

        let mut repetitions = self.repetitions.clone();
        repetitions.truncate(count);

        let turn = if count % 2 == 0 {
            Color::Light
        } else {
            Color::Dark
        };
        let en_passant_target = history.last().and_then(Move::passed_square);
        let (status, king_in_check) = classify(&position, turn, en_passant_target, &repetitions);

        Self {
            position,
            turn,
            selected_piece: self.selected_piece,
            legal_moves: Vec::new(),
            history,
            status,
            en_passant_target,
            promotion_pending: false,
            king_in_check,
            focused_ply: None,
            repetitions,
        }
    }

    /// Apply a validated move, in the documented side-effect order, and
    /// produce the successor state.
    fn commit_move(&self, piece: Piece, target: Square) -> Self {
        let mut position = self.position.clone();

        // 1. Capture determination; an en-passant victim only exists when
        //    the immediately preceding ply was the enabling double push.
        let mut captured = position.piece_at(target).copied();
        if captured.is_none()
            && piece.kind == PieceKind::Pawn
            && self.en_passant_target == Some(target)
        {
            let victim_square = Square::new(target.file, piece.square.rank);
            let enabled = self
                .history
                .last()
                .is_some_and(|last| last.is_double_pawn_push() && last.to == victim_square);
            if enabled {
                captured = position.piece_at(victim_square).copied();
            }
        }

        // 2. A king moving two files is a castle; relocate its rook.
        let castle = if piece.kind == PieceKind::King && piece.square.file.abs_diff(target.file) == 2
        {
            let side = if target.file > piece.square.file {
                CastleSide::Short
            } else {
                CastleSide::Long
            };
            shift_castle_rook(&mut position, piece.color, side)
                .expect("castling was only offered with the rook in place");
            Some(side)
        } else {
            None
        };

        // 3.-4. Remove the captured piece, then relocate the mover.
        if let Some(victim) = captured {
            position.remove(victim.square);
        }
        position.remove(piece.square);
        position.insert(piece.moved_to(target));

        // 5. Disambiguation flags, judged against the pre-move position.
        let (include_file, include_rank) = self.disambiguation(&piece, target);

        // 6. Does the move give check?
        let opponent_king = position.king_of(piece.color.opposite());
        let is_check = is_square_attacked(&position, opponent_king.square, piece.color);

        // 7. En-passant target for the next ply.
        let en_passant_target = (piece.kind == PieceKind::Pawn
            && piece.square.rank.abs_diff(target.rank) == 2)
            .then(|| Square::new(piece.square.file, (piece.square.rank + target.rank) / 2));

        // 8. A pawn reaching the last rank stays a pawn until `promote`.
        let promotion_pending =
            piece.kind == PieceKind::Pawn && (target.rank == 1 || target.rank == 8);

        // 9. Record the ply, flip the turn, count the new signature.
        let mv = Move {
            from: piece.square,
            to: target,
            piece,
            captured,
            castle,
            promotion: None,
            is_check,
            include_file,
            include_rank,
        };
        let mut history = self.history.clone();
        history.push(mv);
        let turn = self.turn.opposite();
        let mut repetitions = self.repetitions.clone();
        repetitions.record(position_signature(&position, turn, en_passant_target));

        // 10. Classify the resulting state for the new side to move.
        let (status, king_in_check) = classify(&position, turn, en_passant_target, &repetitions);

        Self {
            position,
            turn,
            selected_piece: None,
            legal_moves: Vec::new(),
            history,
            status,
            en_passant_target,
            promotion_pending,
            king_in_check,
            focused_ply: None,
            repetitions,
        }
    }

    /// Whether another same-kind piece of the mover's color also legally
    /// reaches `target`, split by file/rank the way short notation needs it.
    fn disambiguation(&self, piece: &Piece, target: Square) -> (bool, bool) {
        if matches!(piece.kind, PieceKind::King | PieceKind::Pawn) {
            return (false, false);
        }

        let mut include_file = false;
        let mut include_rank = false;
        for rival in self.position.pieces_of(piece.color) {
            if rival.kind != piece.kind || rival.square == piece.square {
                continue;
            }
            let reaches = legal_moves(
                &self.position,
                rival,
                self.turn,
                self.en_passant_target,
                self.in_check(),
            )
            .contains(&target);
            if !reaches {
                continue;
            }
            if rival.square.file != piece.square.file {
                include_file = true;
            } else {
                include_rank = true;
            }
        }
        (include_file, include_rank)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Status evaluation plus the threefold-repetition overlay: once the current
/// signature has been seen three times, repetition wins over every other
/// classification.
fn classify(
    position: &Position,
    turn: Color,
    en_passant_target: Option<Square>,
    repetitions: &RepetitionTable,
) -> (GameStatus, Option<Square>) {
    let (status, king_in_check) = evaluate_game_status(position, turn, en_passant_target);
    let signature = position_signature(position, turn, en_passant_target);
    if repetitions.count(&signature) >= THREEFOLD_COUNT {
        (GameStatus::ThreefoldRepetition, king_in_check)
    } else {
        (status, king_in_check)
    }
}
