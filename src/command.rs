use crate::domain::column::ColumnId;
use serde::{Deserialize, Serialize};

/// A board mutation requested by the UI or the drag controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum BoardCommand {
    CreateColumn,
    DeleteColumn { id: ColumnId },
    /// Move `active` into the slot currently held by `over`
    ReorderColumns { active: ColumnId, over: ColumnId },
}

/// Result of applying a [`BoardCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Created(ColumnId),
    Deleted(ColumnId),
    Reordered,
    Unchanged,
}
