//! Route validation and move application.
//!
//! [`Route::validate`] is strictly read-only; [`Board::apply`] is the
//! infallible mutation step that consumes a validated route. Splitting the
//! two keeps every rejected move free of partial board changes.

use std::fmt;

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::movegen::{self, ray_direction};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The ordered squares a move traverses, source first and destination last.
///
/// Only constructed by [`Route::validate`], so holding one proves the move
/// was legal on the board it was validated against.
#[derive(Clone, PartialEq, Eq)]
pub struct Route {
    squares: Vec<Square>,
    piece: Piece,
}

impl Route {
    /// Check that `mover` may move the piece on `source` to `dest`.
    ///
    /// Checks run in order, and the first failure is returned:
    /// 1. a piece of `mover` stands on `source` ([`MoveError::NoPieceOrWrongOwner`]);
    /// 2. `dest` fits the piece's movement pattern ([`MoveError::IllegalDestination`]);
    /// 3. every square strictly between is empty ([`MoveError::BlockedPath`]);
    /// 4. `dest` does not hold a piece of `mover` ([`MoveError::FriendlyCapture`]);
    /// 5. pawn occupancy: a straight step needs an empty destination, a
    ///    diagonal step needs an enemy there.
    pub fn validate(
        board: &Board,
        source: Square,
        dest: Square,
        mover: Color,
    ) -> Result<Route, MoveError> {
        let result = Self::check(board, source, dest, mover);
        if let Err(err) = &result {
            trace!(%source, %dest, %mover, %err, "route rejected");
        }
        result
    }

    fn check(board: &Board, source: Square, dest: Square, mover: Color) -> Result<Route, MoveError> {
        let piece = board
            .piece_at(source)
            .filter(|piece| piece.color() == mover)
            .ok_or(MoveError::NoPieceOrWrongOwner {
                square: source,
                mover,
            })?;

        if !movegen::follows_pattern(piece, source, dest) {
            return Err(MoveError::IllegalDestination {
                from: source,
                to: dest,
            });
        }

        let squares = trace_line(piece, source, dest);
        if let Some(&blocker) = squares[1..squares.len() - 1]
            .iter()
            .find(|&&sq| board.is_occupied(sq))
        {
            return Err(MoveError::BlockedPath {
                from: source,
                to: dest,
                blocker,
            });
        }

        let target = board.piece_at(dest);
        if target.is_some_and(|other| other.color() == mover) {
            return Err(MoveError::FriendlyCapture { to: dest });
        }

        if piece.kind() == PieceKind::Pawn {
            let straight = source.file() == dest.file();
            match (straight, target) {
                (true, Some(_)) => {
                    return Err(MoveError::BlockedPath {
                        from: source,
                        to: dest,
                        blocker: dest,
                    });
                }
                (false, None) => {
                    return Err(MoveError::IllegalDestination {
                        from: source,
                        to: dest,
                    });
                }
                _ => {}
            }
        }

        debug_assert!(
            movegen::destinations(board, source, piece).contains(&dest),
            "validated {source}{dest} missing from generated destinations"
        );
        Ok(Route { squares, piece })
    }

    #[inline]
    pub fn source(&self) -> Square {
        self.squares[0]
    }

    #[inline]
    pub fn dest(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    /// Squares strictly between source and destination.
    pub fn intermediates(&self) -> &[Square] {
        &self.squares[1..self.squares.len() - 1]
    }

    /// Every square of the route, source first.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// The piece making the move.
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }
}

/// Build the full square sequence from `source` to `dest`.
///
/// Sliders and the pawn double step pass through every square on the line;
/// knights, kings and single pawn steps have no intermediates.
fn trace_line(piece: Piece, source: Square, dest: Square) -> Vec<Square> {
    let delta = source.delta(dest);
    let step = match piece.kind() {
        PieceKind::Pawn if delta.0 == 0 => Some((0, delta.1.signum())),
        kind => ray_direction(kind, delta),
    };

    let mut squares = vec![source];
    if let Some((df, dr)) = step {
        let mut cursor = source;
        while let Some(next) = cursor.offset(df, dr) {
            if next == dest {
                break;
            }
            squares.push(next);
            cursor = next;
        }
    }
    squares.push(dest);
    squares
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route({:?}", self.piece)?;
        for sq in &self.squares {
            write!(f, " {sq}")?;
        }
        write!(f, ")")
    }
}

impl Board {
    /// Apply a validated route: clear the source, put the moving piece on
    /// the destination, and return whatever stood there before.
    pub fn apply(&mut self, route: &Route) -> Option<Piece> {
        self.remove(route.source());
        let captured = self.remove(route.dest());
        self.place(route.dest(), route.piece());
        captured
    }
}
