//! Board squares, packed as `rank * 8 + file` (a1 = 0, h8 = 63).

use std::fmt;
use std::str::FromStr;

use crate::error::SquareError;
use crate::file::File;
use crate::rank::Rank;

/// One of the 64 squares. Out-of-range coordinates are unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

/// Declares the named square constants in index order.
macro_rules! named_squares {
    ($($name:ident),* $(,)?) => {
        named_squares!(@at 0u8; $($name),*);
    };
    (@at $index:expr; $name:ident $(, $rest:ident)*) => {
        pub const $name: Square = Square($index);
        named_squares!(@at $index + 1; $($rest),*);
    };
    (@at $index:expr;) => {};
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank as u8 * 8 + file as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square from file and rank indices, both zero-based.
    pub fn from_coords(file: u8, rank: u8) -> Result<Square, SquareError> {
        match (File::from_index(file), Rank::from_index(rank)) {
            (Some(file), Some(rank)) => Ok(Square::new(file, rank)),
            _ => Err(SquareError::OutOfBounds { file, rank }),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Step `df` files and `dr` ranks away, or `None` past the edge.
    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file().offset(df)?;
        let rank = self.rank().offset(dr)?;
        Some(Square::new(file, rank))
    }

    /// Signed file and rank distance from `self` to `other`.
    #[inline]
    pub fn delta(self, other: Square) -> (i8, i8) {
        (
            other.file() as i8 - self.file() as i8,
            other.rank() as i8 - self.rank() as i8,
        )
    }

    /// Iterate over all 64 squares, a1 first and h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    named_squares! {
        A1, B1, C1, D1, E1, F1, G1, H1,
        A2, B2, C2, D2, E2, F2, G2, H2,
        A3, B3, C3, D3, E3, F3, G3, H3,
        A4, B4, C4, D4, E4, F4, G4, H4,
        A5, B5, C5, D5, E5, F5, G5, H5,
        A6, B6, C6, D6, E6, F6, G6, H6,
        A7, B7, C7, D7, E7, F7, G7, H7,
        A8, B8, C8, D8, E8, F8, G8, H8,
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse a coordinate such as `"e4"`.
    fn from_str(s: &str) -> Result<Square, SquareError> {
        let invalid = || SquareError::InvalidSquare {
            found: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = File::from_char(file).ok_or_else(invalid)?;
        let rank = Rank::from_char(rank).ok_or_else(invalid)?;
        Ok(Square::new(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::error::SquareError;
    use crate::file::File;
    use crate::rank::Rank;

    #[test]
    fn named_constants_match_coordinates() {
        assert_eq!(Square::A1, Square::new(File::FileA, Rank::Rank1));
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::A8.index(), 56);
        assert_eq!(Square::E4, Square::new(File::FileE, Rank::Rank4));
        assert_eq!(Square::H8.index(), 63);
    }

    #[test]
    fn file_rank_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::new(sq.file(), sq.rank()), sq);
        }
        assert_eq!(Square::all().count(), Square::COUNT);
    }

    #[test]
    fn parse_valid() {
        assert_eq!("a1".parse::<Square>(), Ok(Square::A1));
        assert_eq!("e4".parse::<Square>(), Ok(Square::E4));
        assert_eq!("h8".parse::<Square>(), Ok(Square::H8));
    }

    #[test]
    fn parse_invalid() {
        for bad in ["", "a", "i1", "a9", "a0", "A1", "a1b", "11"] {
            assert!(
                matches!(bad.parse::<Square>(), Err(SquareError::InvalidSquare { .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn from_coords_rejects_out_of_range() {
        assert_eq!(Square::from_coords(4, 3), Ok(Square::E4));
        assert_eq!(
            Square::from_coords(8, 0),
            Err(SquareError::OutOfBounds { file: 8, rank: 0 })
        );
    }

    #[test]
    fn offset_and_delta() {
        assert_eq!(Square::B1.offset(1, 2), Some(Square::C3));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::A1.delta(Square::C2), (2, 1));
        assert_eq!(Square::E4.delta(Square::B7), (-3, 3));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Square::E4), "e4");
        assert_eq!(format!("{:?}", Square::E4), "Square(e4)");
    }
}
