use crate::{
    command::{BoardCommand, CommandOutcome},
    config::BoardConfig,
    domain::{
        board::Board,
        column::{Column, ColumnId},
    },
    drag::{DragController, DragPayload, Point},
    error::Result,
};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};

/// Input from the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    AddColumnClicked,
    DeleteColumnClicked { id: ColumnId },
    PointerDown { position: Point, payload: DragPayload },
    PointerMove { position: Point },
    PointerUp { over: Option<ColumnId> },
    DragCancelled,
}

/// Read-only snapshot handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BoardView {
    pub columns: Vec<Column>,
    /// Sortable item ids, in rendering order
    pub column_ids: Vec<ColumnId>,
    pub active_column: Option<Column>,
}

/// Single owner of the board and the drag controller
///
/// Every event is handled to completion before the next one is looked at, so
/// the controller only ever sees the column order left by the previous event.
#[derive(Debug)]
pub struct BoardRuntime {
    board: Board,
    drag: DragController,
}

impl BoardRuntime {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            drag: DragController::from_config(&config),
            board: Board::new(config),
        }
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            drag: DragController::from_config(&board.config),
            board,
        }
    }

    /// Handles one UI event, returning the board change it caused
    pub fn handle(&mut self, event: UiEvent) -> Result<Option<CommandOutcome>> {
        let command = match event {
            UiEvent::AddColumnClicked => Some(BoardCommand::CreateColumn),
            UiEvent::DeleteColumnClicked { id } => Some(BoardCommand::DeleteColumn { id }),
            UiEvent::PointerDown { position, payload } => {
                self.drag.pointer_down(position, payload)?;
                None
            }
            UiEvent::PointerMove { position } => {
                self.drag.pointer_move(position);
                None
            }
            UiEvent::PointerUp { over } => self.drag.pointer_up(over),
            UiEvent::DragCancelled => {
                self.drag.cancel();
                None
            }
        };

        command.map(|command| self.board.apply(command)).transpose()
    }

    pub fn view(&self) -> BoardView {
        BoardView {
            columns: self.board.columns().to_vec(),
            column_ids: self.board.column_ids(),
            active_column: self.drag.active_column().cloned(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Runs the event loop until the event sender is dropped
    ///
    /// A view is published after every event. Rejected events are logged and
    /// the loop carries on. Returns the final board.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<UiEvent>,
        views: watch::Sender<BoardView>,
    ) -> Board {
        tracing::info!("Board '{}' event loop started", self.board.config.name);
        views.send_replace(self.view());

        while let Some(event) = events.recv().await {
            match self.handle(event) {
                Ok(Some(outcome)) => tracing::debug!("Applied {:?}", outcome),
                Ok(None) => {}
                Err(e) => tracing::warn!("Rejected UI event: {}", e),
            }
            views.send_replace(self.view());
        }

        tracing::info!(
            "Board '{}' event loop stopped with {} columns",
            self.board.config.name,
            self.board.len()
        );
        self.board
    }
}

impl Default for BoardRuntime {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
