use crate::{
    command::{BoardCommand, CommandOutcome},
    config::BoardConfig,
    domain::{
        column::{Column, ColumnId},
        reorder::array_move,
    },
    error::{BoardError, Result},
};
use std::collections::HashSet;

/// Kanban board state: the ordered column list
///
/// The order of `columns` is the left-to-right rendering order. Column ids are
/// drawn from a counter that only ever increases, so an id is never handed out
/// twice during the board's lifetime, even after the column holding it is
/// deleted. Once the counter reaches `u64::MAX` no further columns can be
/// created.
#[derive(Debug, Clone)]
pub struct Board {
    pub config: BoardConfig,
    columns: Vec<Column>,
    last_column_number: u64,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            columns: Vec::new(),
            last_column_number: 0,
        }
    }

    /// Rebuilds a board from an existing column list, rejecting duplicate ids
    pub fn from_columns(config: BoardConfig, columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.id) {
                return Err(BoardError::IdCollision(column.id));
            }
        }

        let last_column_number = columns
            .iter()
            .map(|col| col.id.value())
            .max()
            .unwrap_or(0);

        Ok(Self {
            config,
            columns,
            last_column_number,
        })
    }

    /// Generates the next column ID
    pub fn generate_id(&mut self) -> Result<ColumnId> {
        let next = self
            .last_column_number
            .checked_add(1)
            .ok_or(BoardError::IdSpaceExhausted)?;
        self.last_column_number = next;
        Ok(ColumnId::new(next))
    }

    /// Appends a new column with a generated id and default title
    pub fn create_column(&mut self) -> Result<&Column> {
        let id = self.generate_id()?;
        let title = self.config.column_title(self.columns.len());
        tracing::debug!("Creating column {} '{}'", id, title);

        self.columns.push(Column::new(id, title));
        Ok(&self.columns[self.columns.len() - 1])
    }

    /// Removes a column, keeping the order of the rest
    ///
    /// An unknown id leaves the board untouched and yields
    /// [`BoardError::ColumnNotFound`].
    pub fn delete_column(&mut self, id: &ColumnId) -> Result<Column> {
        let index = self
            .position_of(id)
            .ok_or(BoardError::ColumnNotFound(*id))?;

        tracing::debug!("Deleting column {} at position {}", id, index);
        Ok(self.columns.remove(index))
    }

    /// Moves the `active` column into the slot currently held by `over`
    pub fn reorder_columns(&mut self, active: &ColumnId, over: &ColumnId) -> Result<()> {
        let from = self
            .position_of(active)
            .ok_or(BoardError::ColumnNotFound(*active))?;
        let to = self
            .position_of(over)
            .ok_or(BoardError::ColumnNotFound(*over))?;

        if from == to {
            return Ok(());
        }

        tracing::debug!("Moving column {} from position {} to {}", active, from, to);
        array_move(&mut self.columns, from, to)
    }

    /// Applies a command and reports what changed
    pub fn apply(&mut self, command: BoardCommand) -> Result<CommandOutcome> {
        match command {
            BoardCommand::CreateColumn => Ok(CommandOutcome::Created(self.create_column()?.id)),
            BoardCommand::DeleteColumn { id } => {
                self.delete_column(&id)?;
                Ok(CommandOutcome::Deleted(id))
            }
            BoardCommand::ReorderColumns { active, over } => {
                self.reorder_columns(&active, &over)?;
                if active == over {
                    Ok(CommandOutcome::Unchanged)
                } else {
                    Ok(CommandOutcome::Reordered)
                }
            }
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column ids in rendering order
    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|col| col.id).collect()
    }

    pub fn get_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    /// Gets the current index of a column
    pub fn position_of(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|col| &col.id == id)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(count: usize) -> Board {
        let mut board = Board::default();
        for _ in 0..count {
            board.create_column().unwrap();
        }
        board
    }

    fn ids(board: &Board) -> Vec<u64> {
        board.columns().iter().map(|col| col.id.value()).collect()
    }

    #[test]
    fn test_board_creation() {
        let board = Board::default();
        assert!(board.is_empty());
        assert_eq!(board.last_column_number, 0);
    }

    #[test]
    fn test_create_three_columns() {
        let board = board_with(3);

        let titles: Vec<&str> = board.columns().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Column 1", "Column 2", "Column 3"]);
        assert_eq!(ids(&board), vec![1, 2, 3]);
    }

    #[test]
    fn test_created_ids_are_distinct() {
        let mut board = Board::default();
        let mut seen = HashSet::new();

        for expected_len in 1..=50 {
            let id = board.create_column().unwrap().id;
            assert!(seen.insert(id));
            assert_eq!(board.len(), expected_len);
        }
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut board = board_with(2);
        board.delete_column(&ColumnId::new(2)).unwrap();

        let column = board.create_column().unwrap();
        assert_eq!(column.id, ColumnId::new(3));
        // title follows the current count, not the id
        assert_eq!(column.title, "Column 2");
    }

    #[test]
    fn test_delete_column() {
        let mut board = board_with(3);

        let removed = board.delete_column(&ColumnId::new(2)).unwrap();
        assert_eq!(removed.id, ColumnId::new(2));
        assert_eq!(ids(&board), vec![1, 3]);
    }

    #[test]
    fn test_delete_missing_column() {
        let mut board = board_with(2);

        let result = board.delete_column(&ColumnId::new(9));
        assert!(matches!(result, Err(BoardError::ColumnNotFound(id)) if id == ColumnId::new(9)));
        assert_eq!(ids(&board), vec![1, 2]);
    }

    #[test]
    fn test_reorder_moves_to_target_slot() {
        let mut board = board_with(3);

        board
            .reorder_columns(&ColumnId::new(1), &ColumnId::new(3))
            .unwrap();
        assert_eq!(ids(&board), vec![2, 3, 1]);
    }

    #[test]
    fn test_reorder_backwards() {
        let mut board = board_with(4);

        board
            .reorder_columns(&ColumnId::new(4), &ColumnId::new(2))
            .unwrap();
        assert_eq!(ids(&board), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_reorder_same_id_is_noop() {
        let mut board = board_with(3);
        let before = board.columns().to_vec();

        board
            .reorder_columns(&ColumnId::new(2), &ColumnId::new(2))
            .unwrap();
        assert_eq!(board.columns(), before.as_slice());
    }

    #[test]
    fn test_reorder_round_trip() {
        let mut board = board_with(4);
        let before = board.columns().to_vec();

        // col-1 lands at index 2, next to col-4; moving it back onto col-2's
        // slot (now index 0) restores the original order
        board
            .reorder_columns(&ColumnId::new(1), &ColumnId::new(3))
            .unwrap();
        assert_eq!(ids(&board), vec![2, 3, 1, 4]);
        board
            .reorder_columns(&ColumnId::new(1), &ColumnId::new(2))
            .unwrap();

        assert_eq!(board.columns(), before.as_slice());
    }

    #[test]
    fn test_reorder_preserves_columns() {
        let mut board = board_with(5);

        board
            .reorder_columns(&ColumnId::new(2), &ColumnId::new(5))
            .unwrap();

        let mut sorted = ids(&board);
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(board.len(), 5);
    }

    #[test]
    fn test_reorder_unknown_ids() {
        let mut board = board_with(2);

        let result = board.reorder_columns(&ColumnId::new(7), &ColumnId::new(1));
        assert!(matches!(result, Err(BoardError::ColumnNotFound(id)) if id == ColumnId::new(7)));

        let result = board.reorder_columns(&ColumnId::new(1), &ColumnId::new(8));
        assert!(matches!(result, Err(BoardError::ColumnNotFound(id)) if id == ColumnId::new(8)));

        assert_eq!(ids(&board), vec![1, 2]);
    }

    #[test]
    fn test_from_columns_rejects_duplicates() {
        let columns = vec![
            Column::new(ColumnId::new(1), "A".to_string()),
            Column::new(ColumnId::new(1), "B".to_string()),
        ];

        let result = Board::from_columns(BoardConfig::default(), columns);
        assert!(matches!(result, Err(BoardError::IdCollision(id)) if id == ColumnId::new(1)));
    }

    #[test]
    fn test_from_columns_resumes_counter() {
        let columns = vec![
            Column::new(ColumnId::new(4), "A".to_string()),
            Column::new(ColumnId::new(9), "B".to_string()),
        ];
        let mut board = Board::from_columns(BoardConfig::default(), columns).unwrap();

        assert_eq!(board.create_column().unwrap().id, ColumnId::new(10));
        assert_eq!(board.column_ids(), vec![ColumnId::new(4), ColumnId::new(9), ColumnId::new(10)]);
    }

    #[test]
    fn test_apply_commands() {
        let mut board = Board::default();

        let outcome = board.apply(BoardCommand::CreateColumn).unwrap();
        assert_eq!(outcome, CommandOutcome::Created(ColumnId::new(1)));
        board.apply(BoardCommand::CreateColumn).unwrap();

        let outcome = board
            .apply(BoardCommand::ReorderColumns {
                active: ColumnId::new(2),
                over: ColumnId::new(1),
            })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Reordered);
        assert_eq!(ids(&board), vec![2, 1]);

        let outcome = board
            .apply(BoardCommand::ReorderColumns {
                active: ColumnId::new(1),
                over: ColumnId::new(1),
            })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Unchanged);

        let outcome = board
            .apply(BoardCommand::DeleteColumn { id: ColumnId::new(2) })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Deleted(ColumnId::new(2)));
        assert_eq!(ids(&board), vec![1]);

        assert!(board
            .apply(BoardCommand::DeleteColumn { id: ColumnId::new(2) })
            .is_err());
    }

    #[test]
    fn test_custom_title_prefix() {
        let config = BoardConfig {
            title_prefix: "Lane".to_string(),
            ..BoardConfig::default()
        };
        let mut board = Board::new(config);

        assert_eq!(board.create_column().unwrap().title, "Lane 1");
    }

    #[test]
    fn test_from_columns_at_max_id() {
        let columns = vec![Column::new(ColumnId::new(u64::MAX), "Last".to_string())];
        let mut board = Board::from_columns(BoardConfig::default(), columns).unwrap();

        assert!(matches!(
            board.create_column(),
            Err(BoardError::IdSpaceExhausted)
        ));
        assert!(matches!(
            board.apply(BoardCommand::CreateColumn),
            Err(BoardError::IdSpaceExhausted)
        ));
        assert_eq!(board.column_ids(), vec![ColumnId::new(u64::MAX)]);
    }

    #[test]
    fn test_rebuilt_board_never_reuses_ids() {
        // columns as the rendering layer would hand them back
        let json = r#"[
            {"id": 1, "title": "Column 1", "created_at": "2024-01-01T00:00:00Z"},
            {"id": 3, "title": "Column 2", "created_at": "2024-01-01T00:00:00Z"}
        ]"#;
        let columns: Vec<Column> = serde_json::from_str(json).unwrap();
        let mut board = Board::from_columns(BoardConfig::default(), columns).unwrap();

        for _ in 0..3 {
            board.create_column().unwrap();
        }

        let ids = board.column_ids();
        let distinct: HashSet<_> = ids.iter().collect();
        assert_eq!(distinct.len(), ids.len());
        assert_eq!(&ids[2..], &[ColumnId::new(4), ColumnId::new(5), ColumnId::new(6)]);
    }
}
