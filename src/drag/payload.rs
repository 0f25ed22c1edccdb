use crate::domain::column::Column;
use serde::{Deserialize, Serialize};

/// Data attached to a draggable entity, tagged by entity kind
///
/// Matches the `{"type": "Column", "column": {...}}` shape the rendering layer
/// attaches to sortable items. Kinds this crate does not handle yet decode to
/// [`DragPayload::Unsupported`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DragPayload {
    Column { column: Column },
    #[serde(other)]
    Unsupported,
}

impl DragPayload {
    pub fn column(column: Column) -> Self {
        Self::Column { column }
    }
}
