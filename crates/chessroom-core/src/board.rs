//! The board: one optional piece per square.

use std::collections::BTreeMap;
use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on the 64 squares.
///
/// Pure data plus queries. The only mutators are crate-private and are
/// driven by [`Board::apply`] once a [`Route`](crate::route::Route) exists.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces. Not a playable position on its own.
    pub fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// The standard initial layout: White on ranks 1-2, Black on ranks 7-8.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
                board.place(Square::new(file, color.back_rank()), Piece::new(kind, color));
                board.place(
                    Square::new(file, color.pawn_rank()),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Return the color of the piece on `sq`, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Snapshot of every occupied square.
    pub fn all_pieces(&self) -> BTreeMap<Square, Piece> {
        self.occupied().collect()
    }

    /// Iterate over occupied squares in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the pieces of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the square of `color`'s king, or `None` once it has been captured.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.occupied()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    pub(crate) fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    pub(crate) fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Check that each side has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = self.occupied().filter(|&(_, piece)| piece == king).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Wrapper for printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::ALL {
                let c = self
                    .0
                    .piece_at(Square::new(file, rank))
                    .map_or('.', Piece::letter);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
