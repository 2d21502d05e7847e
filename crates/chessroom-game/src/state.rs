//! The game-phase state machine.

use std::fmt;

use chessroom_core::{Color, Piece, PieceKind};

use crate::error::GameError;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Winner(Color),
    Draw,
}

impl GameResult {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::Winner(color) => Some(color),
            GameResult::Draw => None,
        }
    }
}

/// Coarse phase without payload, for views and storage labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Ready,
    Running,
    Finished,
}

impl Phase {
    /// Stable uppercase label for a persisted state column.
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Ready => "READY",
            Phase::Running => "RUNNING",
            Phase::Finished => "FINISHED",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current phase of a game and, while it runs, whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// No move played yet. White moves first.
    #[default]
    Ready,
    Running { turn: Color },
    Finished(GameResult),
}

impl GameState {
    pub fn phase(self) -> Phase {
        match self {
            GameState::Ready => Phase::Ready,
            GameState::Running { .. } => Phase::Running,
            GameState::Finished(_) => Phase::Finished,
        }
    }

    /// The side allowed to move, or `None` once finished.
    pub fn turn(self) -> Option<Color> {
        match self {
            GameState::Ready => Some(Color::White),
            GameState::Running { turn } => Some(turn),
            GameState::Finished(_) => None,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, GameState::Finished(_))
    }

    pub fn result(self) -> Option<GameResult> {
        match self {
            GameState::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Fail unless `mover` is allowed to move now.
    pub fn expect_turn(self, mover: Color) -> Result<(), GameError> {
        match self.turn() {
            None => Err(GameError::GameAlreadyEnded),
            Some(expected) if expected != mover => Err(GameError::WrongTurn { expected, mover }),
            Some(_) => Ok(()),
        }
    }

    /// State after `mover` completed a move that removed `captured`.
    ///
    /// Capturing the opposing king ends the game; anything else passes the
    /// turn. Callers check [`GameState::expect_turn`] first.
    pub fn after_move(self, mover: Color, captured: Option<Piece>) -> GameState {
        debug_assert!(self.expect_turn(mover).is_ok());
        match captured {
            Some(piece) if piece.kind() == PieceKind::King && piece.color() != mover => {
                GameState::Finished(GameResult::Winner(mover))
            }
            _ => GameState::Running { turn: !mover },
        }
    }
}
