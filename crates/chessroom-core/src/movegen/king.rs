//! King movement. Castling is not part of the rule set.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// The eight adjacent squares, as (file, rank) deltas.
pub(super) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// One step in any direction. Attacked squares are not filtered out.
pub(super) fn king_destinations(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    super::leap(board, from, piece, &KING_OFFSETS)
}
