//! Sliding piece (bishop, rook, queen) movement.

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

fn directions(kind: PieceKind) -> &'static [(i8, i8)] {
    const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
        (0, 1),
        (1, 0),
        (0, -1),
        (-1, 0),
        (1, 1),
        (1, -1),
        (-1, -1),
        (-1, 1),
    ];
    match kind {
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

/// Walk each ray until the edge or the first occupied square.
///
/// The blocking square is included only when it holds an opposing piece.
pub(super) fn slider_destinations(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    let mut targets = Vec::new();
    for &(df, dr) in directions(piece.kind()) {
        let mut cursor = from;
        while let Some(next) = cursor.offset(df, dr) {
            match board.piece_at(next) {
                None => targets.push(next),
                Some(other) => {
                    if piece.is_enemy_of(other) {
                        targets.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    targets
}

/// Unit step along which `kind` travels to cover `delta`, if it can.
///
/// Returns `None` for non-sliders and for displacements that are not on one
/// of the kind's rays.
pub(crate) fn ray_direction(kind: PieceKind, (df, dr): (i8, i8)) -> Option<(i8, i8)> {
    if (df, dr) == (0, 0) {
        return None;
    }
    let straight = df == 0 || dr == 0;
    let diagonal = df.abs() == dr.abs();
    let allowed = match kind {
        PieceKind::Rook => straight,
        PieceKind::Bishop => diagonal,
        PieceKind::Queen => straight || diagonal,
        _ => false,
    };
    allowed.then(|| (df.signum(), dr.signum()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort();
        squares
    }

    #[test]
    fn rook_on_empty_board_covers_14_squares() {
        let board: Board = "7k/8/8/8/3R4/8/8/K7".parse().unwrap();
        assert_eq!(slider_destinations(&board, Square::D4, Piece::WHITE_ROOK).len(), 14);
    }

    #[test]
    fn ray_stops_before_friend_and_on_enemy() {
        // Rook a1, white pawn a3, black knight c1.
        let board: Board = "7k/8/8/8/8/P7/8/R1n4K".parse().unwrap();
        let targets = sorted(slider_destinations(&board, Square::A1, Piece::WHITE_ROOK));
        assert_eq!(targets, vec![Square::B1, Square::C1, Square::A2]);
    }

    #[test]
    fn bishop_boxed_in_at_start() {
        let board = Board::starting_position();
        assert!(slider_destinations(&board, Square::C1, Piece::WHITE_BISHOP).is_empty());
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let board: Board = "7k/8/8/8/3Q4/8/8/K7".parse().unwrap();
        // 14 orthogonal + 12 diagonal; the ray toward a1 stops at the white king.
        assert_eq!(slider_destinations(&board, Square::D4, Piece::WHITE_QUEEN).len(), 26);
    }

    #[test]
    fn ray_direction_by_kind() {
        assert_eq!(ray_direction(PieceKind::Rook, (0, 4)), Some((0, 1)));
        assert_eq!(ray_direction(PieceKind::Rook, (-3, 0)), Some((-1, 0)));
        assert_eq!(ray_direction(PieceKind::Rook, (2, 2)), None);
        assert_eq!(ray_direction(PieceKind::Bishop, (-2, 2)), Some((-1, 1)));
        assert_eq!(ray_direction(PieceKind::Bishop, (1, 2)), None);
        assert_eq!(ray_direction(PieceKind::Queen, (5, -5)), Some((1, -1)));
        assert_eq!(ray_direction(PieceKind::Queen, (0, 0)), None);
        assert_eq!(ray_direction(PieceKind::Knight, (1, 2)), None);
    }
}
