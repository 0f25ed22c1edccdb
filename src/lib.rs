//! # Colboard Core
//!
//! Column state and drag-and-drop reordering for a kanban board.
//!
//! This crate owns the ordered list of columns and the drag gesture state
//! machine that reorders them. Rendering is left to the caller, which reads
//! [`BoardView`] snapshots and feeds pointer and button events back in.

pub mod command;
pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod runtime;

// Re-export commonly used types
pub use command::{BoardCommand, CommandOutcome};
pub use config::BoardConfig;
pub use domain::{
    board::Board,
    column::{Column, ColumnId},
};
pub use drag::{DragController, DragPayload, DragSession, Point};
pub use error::{BoardError, Result};
pub use runtime::{BoardRuntime, BoardView, UiEvent};
