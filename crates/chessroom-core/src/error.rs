//! Error types for squares, board construction, and move validation.

use crate::color::Color;
use crate::square::Square;

/// Errors from building a [`Square`](crate::square::Square).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// The text is not a coordinate in `a1..h8`.
    #[error("invalid square: \"{found}\"")]
    InvalidSquare {
        /// The text that failed to parse.
        found: String,
    },
    /// Numeric coordinates outside the 8x8 board.
    #[error("square ({file}, {rank}) is off the board")]
    OutOfBounds {
        /// Zero-based file index.
        file: u8,
        /// Zero-based rank index.
        rank: u8,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
}

/// Errors from parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// Rank number as printed on the board (8 is the first field).
        rank: usize,
        length: usize,
    },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// Why a source/destination pair was rejected by the route validator.
///
/// Each kind is reported as-is to the caller; the board is never touched
/// when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The source square is empty or holds a piece of the other side.
    #[error("no {mover} piece on {square}")]
    NoPieceOrWrongOwner { square: Square, mover: Color },

    /// The piece cannot reach the destination under its movement rule.
    #[error("a piece on {from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },

    /// A square on the way, or a pawn's straight destination, is occupied.
    #[error("path from {from} to {to} is blocked at {blocker}")]
    BlockedPath {
        from: Square,
        to: Square,
        blocker: Square,
    },

    /// The destination holds a piece of the moving side.
    #[error("cannot capture own piece on {to}")]
    FriendlyCapture { to: Square },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, MoveError, PlacementError, SquareError};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn square_error_display() {
        let err = SquareError::InvalidSquare {
            found: "z9".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid square: \"z9\"");
    }

    #[test]
    fn placement_error_from_board_error() {
        let board_err = BoardError::InvalidKingCount {
            color: Color::Black,
            count: 0,
        };
        let err: PlacementError = board_err.into();
        assert!(matches!(err, PlacementError::InvalidBoard { .. }));
        assert_eq!(
            format!("{err}"),
            "invalid board: expected 1 king for black, found 0"
        );
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::BlockedPath {
            from: Square::A1,
            to: Square::A5,
            blocker: Square::A3,
        };
        assert_eq!(format!("{err}"), "path from a1 to a5 is blocked at a3");
    }
}
