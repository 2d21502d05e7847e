//! Material score per side.

use std::fmt;

use chessroom_core::{Board, Color, File, PieceKind};

use crate::state::GameResult;

/// Piece values in half points, indexed by [`PieceKind::index()`].
///
/// | Piece  | points |
/// |--------|--------|
/// | Pawn   | 1      |
/// | Knight | 2.5    |
/// | Bishop | 3      |
/// | Rook   | 5      |
/// | Queen  | 9      |
/// | King   | 0      |
const HALF_POINTS: [u32; PieceKind::COUNT] = [2, 5, 6, 10, 18, 0];

/// A pawn sharing its file with another friendly pawn is worth half a point.
const DOUBLED_PAWN_HALF_POINTS: u32 = 1;

/// A side's material, kept in half points so it stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u32);

impl Score {
    /// Sum `color`'s material on `board`.
    pub fn of(board: &Board, color: Color) -> Score {
        let mut pawns_per_file = [0u32; File::COUNT];
        let mut total = 0;

        for (sq, piece) in board.pieces_of(color) {
            if piece.kind() == PieceKind::Pawn {
                pawns_per_file[sq.file().index()] += 1;
            } else {
                total += HALF_POINTS[piece.kind().index()];
            }
        }

        for count in pawns_per_file {
            total += match count {
                0 => 0,
                1 => HALF_POINTS[PieceKind::Pawn.index()],
                n => n * DOUBLED_PAWN_HALF_POINTS,
            };
        }

        Score(total)
    }

    pub const fn half_points(self) -> u32 {
        self.0
    }

    pub fn points(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 2;
        if self.0 % 2 == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.5")
        }
    }
}

/// Both sides' scores at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub white: Score,
    pub black: Score,
}

impl Status {
    pub fn of(board: &Board) -> Status {
        Status {
            white: Score::of(board, Color::White),
            black: Score::of(board, Color::Black),
        }
    }

    pub fn score(&self, color: Color) -> Score {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// The side ahead on material, or a draw when level.
    pub fn leader(&self) -> GameResult {
        use std::cmp::Ordering;
        match self.white.cmp(&self.black) {
            Ordering::Greater => GameResult::Winner(Color::White),
            Ordering::Less => GameResult::Winner(Color::Black),
            Ordering::Equal => GameResult::Draw,
        }
    }
}
