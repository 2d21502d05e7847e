//! Pawn movement: pushes, the double step from the starting rank, and
//! diagonal captures. No en passant and no promotion.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

pub(super) fn pawn_destinations(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let forward = color.forward();
    let mut targets = Vec::with_capacity(4);

    if let Some(single) = from.offset(0, forward).filter(|&sq| !board.is_occupied(sq)) {
        targets.push(single);
        if from.rank() == color.pawn_rank() {
            if let Some(double) = single.offset(0, forward).filter(|&sq| !board.is_occupied(sq)) {
                targets.push(double);
            }
        }
    }

    for side in [-1, 1] {
        let Some(diagonal) = from.offset(side, forward) else {
            continue;
        };
        if board.color_at(diagonal) == Some(!color) {
            targets.push(diagonal);
        }
    }

    targets
}

/// Geometric pawn pattern: one step forward, two from the starting rank,
/// or one diagonal step forward.
pub(super) fn pawn_pattern(color: Color, from: Square, (df, dr): (i8, i8)) -> bool {
    let forward = color.forward();
    match (df, dr) {
        (0, dr) if dr == forward => true,
        (0, dr) if dr == 2 * forward => from.rank() == color.pawn_rank(),
        (-1 | 1, dr) => dr == forward,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort();
        squares
    }

    #[test]
    fn single_and_double_push_from_start() {
        let board = Board::starting_position();
        assert_eq!(
            sorted(pawn_destinations(&board, Square::A2, Color::White)),
            vec![Square::A3, Square::A4]
        );
        assert_eq!(
            sorted(pawn_destinations(&board, Square::E7, Color::Black)),
            vec![Square::E5, Square::E6]
        );
    }

    #[test]
    fn no_double_push_after_moving() {
        let board: Board = "4k3/8/8/8/8/P7/8/4K3".parse().unwrap();
        assert_eq!(
            pawn_destinations(&board, Square::A3, Color::White),
            vec![Square::A4]
        );
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let blocked_near: Board = "4k3/8/8/8/8/n7/P7/4K3".parse().unwrap();
        assert!(pawn_destinations(&blocked_near, Square::A2, Color::White).is_empty());

        let blocked_far: Board = "4k3/8/8/8/n7/8/P7/4K3".parse().unwrap();
        assert_eq!(
            pawn_destinations(&blocked_far, Square::A2, Color::White),
            vec![Square::A3]
        );
    }

    #[test]
    fn diagonal_only_onto_enemy() {
        // White pawn d4, black pawn e5, white knight c5.
        let board: Board = "4k3/8/8/2N1p3/3P4/8/8/4K3".parse().unwrap();
        assert_eq!(
            sorted(pawn_destinations(&board, Square::D4, Color::White)),
            vec![Square::D5, Square::E5]
        );
    }

    #[test]
    fn pawn_on_last_rank_is_stuck() {
        let board: Board = "P3k3/8/8/8/8/8/8/4K3".parse().unwrap();
        assert!(pawn_destinations(&board, Square::A8, Color::White).is_empty());
    }

    #[test]
    fn pattern_respects_direction() {
        assert!(pawn_pattern(Color::White, Square::E2, (0, 1)));
        assert!(pawn_pattern(Color::White, Square::E2, (0, 2)));
        assert!(!pawn_pattern(Color::White, Square::E3, (0, 2)));
        assert!(!pawn_pattern(Color::White, Square::E3, (0, -1)));
        assert!(pawn_pattern(Color::White, Square::E3, (1, 1)));
        assert!(pawn_pattern(Color::Black, Square::E7, (0, -2)));
        assert!(pawn_pattern(Color::Black, Square::E7, (-1, -1)));
        assert!(!pawn_pattern(Color::Black, Square::E7, (1, 1)));
        assert!(!pawn_pattern(Color::Black, Square::E7, (2, -1)));
    }
}
