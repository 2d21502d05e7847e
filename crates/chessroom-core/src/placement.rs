//! Piece-placement notation (the first field of FEN) for [`Board`].

use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::file::File;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// Placement string of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    /// Parse ranks 8 down to 1 separated by `/`; digits count empty squares.
    ///
    /// The result must hold exactly one king per side.
    fn from_str(placement: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != Rank::COUNT {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank, text) in Rank::ALL.into_iter().rev().zip(ranks) {
            let mut file_index: usize = 0;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file_index += skip as usize;
                    continue;
                }
                let piece =
                    Piece::from_letter(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let file = File::from_index(file_index as u8).ok_or(
                    PlacementError::BadRankLength {
                        rank: rank.index() + 1,
                        length: file_index + 1,
                    },
                )?;
                board.place(Square::new(file, rank), piece);
                file_index += 1;
            }
            if file_index != File::COUNT {
                return Err(PlacementError::BadRankLength {
                    rank: rank.index() + 1,
                    length: file_index,
                });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

impl Board {
    /// Render the placement string, the inverse of [`Board::from_str`].
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0u8;
            for file in File::ALL {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(piece.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
            if rank != Rank::Rank1 {
                out.push('/');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::{BoardError, PlacementError};
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_placement_matches_starting_position() {
        let board: Board = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(Board::starting_position().placement(), STARTING_PLACEMENT);
    }

    #[test]
    fn sparse_position() {
        let board: Board = "4k3/8/8/8/8/p7/8/R3K3".parse().unwrap();
        assert_eq!(board.piece_at(Square::A1), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_at(Square::A3), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(Square::E8), Some(Piece::BLACK_KING));
        assert_eq!(board.count(), 4);
        assert_eq!(board.placement(), "4k3/8/8/8/8/p7/8/R3K3");
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            "8/8/8".parse::<Board>(),
            Err(PlacementError::WrongRankCount { found: 3 })
        );
    }

    #[test]
    fn bad_rank_length() {
        assert_eq!(
            "4k3/8/8/8/8/8/8/R3K4".parse::<Board>(),
            Err(PlacementError::BadRankLength { rank: 1, length: 9 })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/7/R3K3".parse::<Board>(),
            Err(PlacementError::BadRankLength { rank: 2, length: 7 })
        );
    }

    #[test]
    fn invalid_piece_char() {
        assert_eq!(
            "4k3/8/8/8/8/8/8/R3X3".parse::<Board>(),
            Err(PlacementError::InvalidPieceChar { character: 'X' })
        );
    }

    #[test]
    fn requires_one_king_each() {
        assert_eq!(
            "8/8/8/8/8/8/8/R3K3".parse::<Board>(),
            Err(PlacementError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    color: Color::Black,
                    count: 0
                }
            })
        );
    }
}
