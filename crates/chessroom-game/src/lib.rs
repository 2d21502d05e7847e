//! Game layer for chessroom: move instructions, the phase state machine,
//! replay from a move log, and scoring.

pub mod command;
pub mod error;
pub mod game;
pub mod score;
pub mod state;

pub use command::{MoveCommand, parse_command};
pub use error::{ErrorKind, GameError, ReplayError};
pub use game::{Game, GameView, MoveRecord};
pub use score::{Score, Status};
pub use state::{GameResult, GameState, Phase};
