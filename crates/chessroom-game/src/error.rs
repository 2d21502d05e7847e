//! Game-level errors.

use chessroom_core::{Color, MoveError};

/// Why a move attempt was rejected. The game is unchanged after any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The instruction is not two square coordinates.
    #[error("malformed command: \"{input}\"")]
    MalformedCommand {
        /// The raw instruction as received.
        input: String,
    },

    /// It is not the mover's turn.
    #[error("it is {expected}'s turn, not {mover}'s")]
    WrongTurn { expected: Color, mover: Color },

    /// The game is finished and accepts no more moves.
    #[error("the game has already ended")]
    GameAlreadyEnded,

    /// The move broke a movement rule.
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Flat tag for every rejection kind a caller may want to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedCommand,
    WrongTurn,
    NoPieceOrWrongOwner,
    IllegalDestination,
    BlockedPath,
    FriendlyCapture,
    GameAlreadyEnded,
}

impl GameError {
    /// Return the flat kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::MalformedCommand { .. } => ErrorKind::MalformedCommand,
            GameError::WrongTurn { .. } => ErrorKind::WrongTurn,
            GameError::GameAlreadyEnded => ErrorKind::GameAlreadyEnded,
            GameError::Move(err) => match err {
                MoveError::NoPieceOrWrongOwner { .. } => ErrorKind::NoPieceOrWrongOwner,
                MoveError::IllegalDestination { .. } => ErrorKind::IllegalDestination,
                MoveError::BlockedPath { .. } => ErrorKind::BlockedPath,
                MoveError::FriendlyCapture { .. } => ErrorKind::FriendlyCapture,
            },
        }
    }
}

/// Replaying a persisted move log failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// A recorded move is illegal against the state rebuilt so far.
    #[error("corrupt history at move {ply} (\"{instruction}\"): {source}")]
    CorruptHistory {
        /// Zero-based index of the offending entry.
        ply: usize,
        /// The entry as stored.
        instruction: String,
        /// Why the entry was rejected.
        source: GameError,
    },
}
