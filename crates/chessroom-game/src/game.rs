//! A single game: the board, the phase state machine, and the history of
//! accepted moves.

use tracing::{debug, info, warn};

use chessroom_core::{Board, BoardError, Color, Piece, Route, Square, legal_destinations};

use crate::command::{MoveCommand, parse_command};
use crate::error::{GameError, ReplayError};
use crate::score::Status;
use crate::state::{GameResult, GameState, Phase};

/// Outcome of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub command: MoveCommand,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

/// Read-only snapshot handed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    pub board: Board,
    /// The side to move; `None` once the game is finished.
    pub turn: Option<Color>,
    pub phase: Phase,
}

/// One game instance. Owns its board and state exclusively.
///
/// Not internally synchronized: a caller sharing a game across threads must
/// serialize calls to the `&mut self` methods itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: GameState,
    history: Vec<MoveCommand>,
}

impl Game {
    /// A fresh game in the Ready phase with the standard layout.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            state: GameState::Ready,
            history: Vec::new(),
        }
    }

    /// Start a game from an arbitrary position with `turn` to move.
    ///
    /// The game is Running from the outset and has no history, so it cannot
    /// be rebuilt with [`Game::replay`].
    pub fn from_position(board: Board, turn: Color) -> Result<Game, BoardError> {
        board.validate()?;
        Ok(Game {
            board,
            state: GameState::Running { turn },
            history: Vec::new(),
        })
    }

    /// Rebuild a game by replaying `instructions` from the initial layout.
    ///
    /// Each entry is played by the side whose turn it is. The first entry
    /// that does not apply aborts the rebuild with
    /// [`ReplayError::CorruptHistory`]; nothing is skipped.
    pub fn replay<I, S>(instructions: I) -> Result<Game, ReplayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut game = Game::new();
        for (ply, instruction) in instructions.into_iter().enumerate() {
            let instruction = instruction.as_ref();
            let mover = game.state.turn().unwrap_or(Color::White);
            if let Err(source) = game.apply_move(instruction, mover) {
                warn!(ply, instruction, %source, "replay aborted on corrupt history");
                return Err(ReplayError::CorruptHistory {
                    ply,
                    instruction: instruction.to_string(),
                    source,
                });
            }
        }
        debug!(moves = game.history.len(), phase = %game.phase(), "game replayed");
        Ok(game)
    }

    /// Parse `raw` and play it as `mover`.
    ///
    /// Checks run before any mutation, so a rejected move leaves the game
    /// exactly as it was.
    pub fn apply_move(&mut self, raw: &str, mover: Color) -> Result<MoveRecord, GameError> {
        if self.state.is_finished() {
            return Err(GameError::GameAlreadyEnded);
        }
        let command = parse_command(raw)?;
        self.play(command, mover)
    }

    /// Play an already parsed command as `mover`.
    pub fn play(&mut self, command: MoveCommand, mover: Color) -> Result<MoveRecord, GameError> {
        self.state.expect_turn(mover)?;
        let route = Route::validate(&self.board, command.source, command.dest, mover)?;

        let captured = self.board.apply(&route);
        self.state = self.state.after_move(mover, captured);
        self.history.push(command);

        debug!(%command, %mover, ?captured, "move applied");
        if let GameState::Finished(result) = self.state {
            info!(?result, moves = self.history.len(), "game finished");
        }

        Ok(MoveRecord {
            command,
            piece: route.piece(),
            captured,
        })
    }

    /// Finish the game on request; the side ahead on material wins.
    pub fn end(&mut self) -> Result<GameResult, GameError> {
        if self.state.is_finished() {
            return Err(GameError::GameAlreadyEnded);
        }
        let result = self.status().leader();
        self.state = GameState::Finished(result);
        info!(?result, moves = self.history.len(), "game ended on request");
        Ok(result)
    }

    pub fn view(&self) -> GameView {
        GameView {
            board: self.board,
            turn: self.state.turn(),
            phase: self.state.phase(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The side to move, `None` once finished.
    #[inline]
    pub fn turn(&self) -> Option<Color> {
        self.state.turn()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The winning side; `None` while playing or after a draw.
    pub fn winner(&self) -> Option<Color> {
        self.state.result().and_then(GameResult::winner)
    }

    /// Accepted moves in order, ready to be persisted and replayed.
    pub fn history(&self) -> &[MoveCommand] {
        &self.history
    }

    pub fn status(&self) -> Status {
        Status::of(&self.board)
    }

    /// Destinations available to the piece on `sq`, regardless of turn.
    pub fn destinations(&self, sq: Square) -> Vec<Square> {
        legal_destinations(&self.board, sq)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
