//! Drag interaction controller
//!
//! Turns pointer input into drag gestures over columns. A press only becomes
//! a drag once the pointer has travelled past the [`PointerSensor`]'s
//! activation distance, so buttons inside a draggable column stay clickable.
//! Each completed gesture produces at most one [`BoardCommand`]; the board
//! itself is never touched from here.

pub mod payload;
pub mod sensor;

pub use payload::DragPayload;
pub use sensor::{Point, PointerSensor};

use crate::{
    command::BoardCommand,
    config::BoardConfig,
    domain::column::{Column, ColumnId},
    error::{BoardError, Result},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A column drag in progress
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub id: Uuid,
    /// Column shown in the drag overlay
    pub active: Column,
    pub started_at: DateTime<Utc>,
}

impl DragSession {
    fn new(active: Column) -> Self {
        Self {
            id: Uuid::new_v4(),
            active,
            started_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum DragPhase {
    Idle,
    /// Pointer pressed but not yet moved past the activation distance
    Pending { origin: Point, payload: DragPayload },
    Dragging(DragSession),
}

/// Drag gesture state machine: idle, pending activation, dragging
#[derive(Debug, Clone)]
pub struct DragController {
    sensor: PointerSensor,
    phase: DragPhase,
}

impl DragController {
    pub fn new(sensor: PointerSensor) -> Self {
        Self {
            sensor,
            phase: DragPhase::Idle,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(PointerSensor::new(config.activation_distance))
    }

    /// Records a press on a draggable entity
    pub fn pointer_down(&mut self, origin: Point, payload: DragPayload) -> Result<()> {
        if self.phase != DragPhase::Idle {
            return Err(BoardError::DragInProgress);
        }
        self.phase = DragPhase::Pending { origin, payload };
        Ok(())
    }

    /// Tracks pointer movement, returns true when this move started a drag
    pub fn pointer_move(&mut self, position: Point) -> bool {
        let DragPhase::Pending { origin, payload } = &self.phase else {
            return false;
        };
        if !self.sensor.is_activated(*origin, position) {
            return false;
        }

        let payload = payload.clone();
        self.activate(payload)
    }

    /// Releases the pointer over an optional drop target
    ///
    /// A release before activation is a plain click and yields nothing.
    pub fn pointer_up(&mut self, over: Option<ColumnId>) -> Option<BoardCommand> {
        if self.is_dragging() {
            return self.drag_end(over);
        }
        self.phase = DragPhase::Idle;
        None
    }

    /// Starts a drag directly, bypassing the pointer sensor
    ///
    /// Returns whether a column session was started; payloads of other
    /// entity kinds are ignored.
    pub fn drag_start(&mut self, payload: DragPayload) -> Result<bool> {
        if !self.is_idle() {
            return Err(BoardError::DragInProgress);
        }
        Ok(self.activate(payload))
    }

    /// Ends the current drag and computes the reorder, if any
    pub fn drag_end(&mut self, over: Option<ColumnId>) -> Option<BoardCommand> {
        let DragPhase::Dragging(session) = std::mem::replace(&mut self.phase, DragPhase::Idle)
        else {
            return None;
        };

        let active = session.active.id;
        match over {
            Some(over) if over != active => {
                tracing::debug!(session = %session.id, "Dropped column {} over {}", active, over);
                Some(BoardCommand::ReorderColumns { active, over })
            }
            _ => {
                tracing::debug!(session = %session.id, "Column {} dropped without a target", active);
                None
            }
        }
    }

    /// Abandons the current gesture without reordering
    pub fn cancel(&mut self) {
        if let DragPhase::Dragging(session) = &self.phase {
            tracing::debug!(session = %session.id, "Drag of column {} cancelled", session.active.id);
        }
        self.phase = DragPhase::Idle;
    }

    /// Column to render in the drag overlay
    pub fn active_column(&self) -> Option<&Column> {
        self.session().map(|session| &session.active)
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            DragPhase::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    pub fn is_idle(&self) -> bool {
        self.phase == DragPhase::Idle
    }

    fn activate(&mut self, payload: DragPayload) -> bool {
        match payload {
            DragPayload::Column { column } => {
                let session = DragSession::new(column);
                tracing::debug!(session = %session.id, "Started dragging column {}", session.active.id);
                self.phase = DragPhase::Dragging(session);
                true
            }
            DragPayload::Unsupported => {
                tracing::debug!("Ignoring drag of unsupported entity");
                self.phase = DragPhase::Idle;
                false
            }
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(PointerSensor::default())
    }
}
