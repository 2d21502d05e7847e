//! Core chess types: squares, pieces, the board, per-kind movement rules,
//! and route validation.

mod board;
mod color;
mod error;
mod file;
pub mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod rank;
mod route;
mod square;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, MoveError, PlacementError, SquareError};
pub use file::File;
pub use movegen::legal_destinations;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use rank::Rank;
pub use route::Route;
pub use square::Square;
