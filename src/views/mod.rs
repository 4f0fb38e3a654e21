// src/views/mod.rs

pub mod move_slot;
pub mod stack_geometry;
pub mod style;
pub mod view_board;
pub mod view_cell;

pub use move_slot::MoveSlot;
pub use stack_geometry::{StackGeometry, StackOffsets};
pub use style::BoardStyle;
pub use view_board::{PendingMove, ViewBoard};
pub use view_cell::ViewCell;
