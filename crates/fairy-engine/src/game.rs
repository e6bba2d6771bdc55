//! Game session management.
//!
//! The [`Session`] struct owns everything a game needs:
//! - the board and the side to move
//! - each side's graveyard of lost major pieces
//! - each side's remaining fairy pieces
//! - the game state, which becomes terminal when a king is captured
//! - the history of accepted actions

use fairy_core::{Color, FairyKind, Piece, Square};
use serde::{Deserialize, Serialize};

use crate::fairy::{self, FairyAvailability};
use crate::moves::{self, MoveOutcome};
use crate::{Board, Rejection, Snapshot};

/// Whether the game is still being played, and who won if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    WhiteWon,
    BlackWon,
}

impl GameState {
    /// The state reached when `color` captures the opposing king.
    #[inline]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteWon,
            Color::Black => GameState::BlackWon,
        }
    }

    /// Returns true once a king has been captured.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// Returns the winning color, if any.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::InProgress => None,
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::InProgress => write!(f, "in progress"),
            GameState::WhiteWon => write!(f, "White wins"),
            GameState::BlackWon => write!(f, "Black wins"),
        }
    }
}

/// An accepted action, as recorded in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A piece moved (and possibly captured).
    Move(MoveOutcome),
    /// A fairy piece entered the board.
    Entry {
        color: Color,
        kind: FairyKind,
        square: Square,
    },
}

/// A single game of Falcon & Hunter chess.
///
/// Every `submit_*` method either applies the action completely and passes
/// the turn, or returns a [`Rejection`] and leaves the session exactly as
/// it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    side_to_move: Color,
    /// Captured major pieces, indexed by the color that lost them.
    graveyards: [Vec<Piece>; 2],
    /// Fairy kinds not yet entered, indexed by color.
    fairies: [FairyAvailability; 2],
    state: GameState,
    history: Vec<Action>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a new game from the standard layout with White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Creates a game from a custom board.
    ///
    /// Graveyards start empty and both sides hold both fairies.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Session {
            board,
            side_to_move,
            graveyards: [Vec::new(), Vec::new()],
            fairies: [FairyAvailability::ALL; 2],
            state: GameState::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color allowed to act next.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns true once a king has been captured.
    pub fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the major pieces `color` has lost, in capture order.
    pub fn graveyard(&self, color: Color) -> &[Piece] {
        &self.graveyards[color.index()]
    }

    /// Returns the fairy kinds `color` may still enter.
    pub fn available_fairies(&self, color: Color) -> FairyAvailability {
        self.fairies[color.index()]
    }

    /// Returns every accepted action in order.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Returns a serializable view of the session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// Moves the piece on `from` to `to` for the side to move.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, Rejection> {
        self.submit_move_as(self.side_to_move, from, to)
    }

    /// Moves a piece on behalf of `player`, who must hold the turn.
    pub fn submit_move_as(
        &mut self,
        player: Color,
        from: Square,
        to: Square,
    ) -> Result<MoveOutcome, Rejection> {
        let side = self.side_to_move;
        let result = self
            .ensure_turn(player)
            .and_then(|()| moves::validate_and_apply(&mut self.board, side, from, to));

        match result {
            Ok(outcome) => {
                tracing::debug!(
                    side = %side,
                    from = %from,
                    to = %to,
                    captured = ?outcome.captured,
                    "move accepted"
                );
                self.record_move(outcome);
                Ok(outcome)
            }
            Err(reason) => {
                tracing::debug!(side = %side, from = %from, to = %to, %reason, "move rejected");
                Err(reason)
            }
        }
    }

    /// Enters a fairy piece for the side to move.
    pub fn submit_fairy_entry(&mut self, kind: FairyKind, target: Square) -> Result<(), Rejection> {
        self.submit_fairy_entry_as(self.side_to_move, kind, target)
    }

    /// Enters a fairy piece on behalf of `player`, who must hold the turn.
    pub fn submit_fairy_entry_as(
        &mut self,
        player: Color,
        kind: FairyKind,
        target: Square,
    ) -> Result<(), Rejection> {
        let side = self.side_to_move;
        let result = self.ensure_turn(player).and_then(|()| {
            let losses = self.graveyards[side.index()].len();
            fairy::introduce(
                &mut self.board,
                side,
                losses,
                &mut self.fairies[side.index()],
                kind,
                target,
            )
        });

        match result {
            Ok(_) => {
                tracing::debug!(side = %side, %kind, square = %target, "fairy entered");
                self.history.push(Action::Entry {
                    color: side,
                    kind,
                    square: target,
                });
                self.side_to_move = side.opposite();
                Ok(())
            }
            Err(reason) => {
                tracing::debug!(side = %side, %kind, square = %target, %reason, "fairy entry rejected");
                Err(reason)
            }
        }
    }

    /// Rejects actions after the game ended or out of turn.
    fn ensure_turn(&self, player: Color) -> Result<(), Rejection> {
        if self.state.is_terminal() {
            return Err(Rejection::GameAlreadyOver);
        }
        if player != self.side_to_move {
            return Err(Rejection::NotYourTurn);
        }
        Ok(())
    }

    /// Bookkeeping after a move has been applied to the board.
    fn record_move(&mut self, outcome: MoveOutcome) {
        let mover = outcome.piece.color;

        if let Some(captured) = outcome.captured {
            if captured.is_major() {
                self.graveyards[captured.color.index()].push(captured);
            }
            if captured.is_king() {
                self.state = GameState::won_by(mover);
                tracing::info!(winner = %mover, square = %outcome.to, "king captured, game over");
            }
        }

        self.history.push(Action::Move(outcome));
        self.side_to_move = mover.opposite();
    }
}
