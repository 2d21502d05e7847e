//! Per-kind movement rules.
//!
//! Every rule is a pure function of (board, source square, piece) and never
//! mutates the board. Two views are provided per kind: the full list of
//! destinations reachable on the current board, and the bare geometric
//! pattern the route validator checks before looking at occupancy.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub(crate) use self::sliders::ray_direction;

/// Return every square the piece on `from` may move to.
///
/// Empty when `from` is empty. A destination is listed when it is empty or
/// holds an opposing piece, following the piece's own rule.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    match board.piece_at(from) {
        Some(piece) => destinations(board, from, piece),
        None => Vec::new(),
    }
}

/// Dispatch on the piece kind.
pub(crate) fn destinations(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    match piece.kind() {
        PieceKind::Pawn => pawns::pawn_destinations(board, from, piece.color()),
        PieceKind::Knight => knights::knight_destinations(board, from, piece),
        PieceKind::King => king::king_destinations(board, from, piece),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            sliders::slider_destinations(board, from, piece)
        }
    }
}

/// Return `true` if `to` matches the piece's movement pattern from `from`,
/// ignoring every other piece on the board.
pub(crate) fn follows_pattern(piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let delta = from.delta(to);
    match piece.kind() {
        PieceKind::Pawn => pawns::pawn_pattern(piece.color(), from, delta),
        PieceKind::Knight => knights::KNIGHT_OFFSETS.contains(&delta),
        PieceKind::King => king::KING_OFFSETS.contains(&delta),
        kind => ray_direction(kind, delta).is_some(),
    }
}

/// Collect the fixed-offset targets of a leaper that are empty or hostile.
fn leap(board: &Board, from: Square, piece: Piece, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&to| board.piece_at(to).is_none_or(|other| piece.is_enemy_of(other)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn starting_position_has_20_moves_per_side() {
        let board = Board::starting_position();
        for color in Color::ALL {
            let total: usize = board
                .pieces_of(color)
                .map(|(sq, _)| legal_destinations(&board, sq).len())
                .sum();
            assert_eq!(total, 20, "{color} should have 20 moves");
        }
    }

    #[test]
    fn empty_square_has_no_destinations() {
        let board = Board::starting_position();
        assert!(legal_destinations(&board, Square::E4).is_empty());
    }

    #[test]
    fn pattern_ignores_occupancy() {
        // The rook on a1 is boxed in, but a1-a8 is still a rook line.
        assert!(follows_pattern(Piece::WHITE_ROOK, Square::A1, Square::A8));
        assert!(!follows_pattern(Piece::WHITE_ROOK, Square::A1, Square::B3));
        assert!(follows_pattern(Piece::WHITE_BISHOP, Square::C1, Square::H6));
        assert!(follows_pattern(Piece::WHITE_QUEEN, Square::D1, Square::D7));
        assert!(follows_pattern(Piece::WHITE_KNIGHT, Square::B1, Square::C3));
        assert!(!follows_pattern(Piece::WHITE_KNIGHT, Square::B1, Square::B3));
        assert!(follows_pattern(Piece::BLACK_KING, Square::E8, Square::D7));
        assert!(!follows_pattern(Piece::BLACK_KING, Square::E8, Square::E6));
    }

    #[test]
    fn pattern_rejects_null_move() {
        for sq in [Square::A1, Square::D4] {
            assert!(!follows_pattern(Piece::WHITE_QUEEN, sq, sq));
        }
    }
}
