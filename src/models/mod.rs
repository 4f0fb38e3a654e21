pub mod board;
pub mod notation;
pub mod square;
pub mod tile;

pub use board::{BoardModel, TakBoard};
pub use notation::{Move, NotationError};
pub use square::{Direction, Square, COLS};
pub use tile::{Player, Stone, Tile};
