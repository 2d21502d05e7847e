//! Knight movement.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// The eight L-shaped jumps, as (file, rank) deltas.
pub(super) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Knights jump, so nothing between source and target matters.
pub(super) fn knight_destinations(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    super::leap(board, from, piece, &KNIGHT_OFFSETS)
}
