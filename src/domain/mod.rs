pub mod board;
pub mod column;
pub mod reorder;

pub use board::Board;
pub use column::{Column, ColumnId};
pub use reorder::array_move;
