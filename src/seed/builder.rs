use crate::{
    domain::{Board, BoardConfig, Column, ColumnId, Item},
    error::{KanbanError, Result},
};

/// Assembles a valid seed board column by column.
///
/// Columns keep the order in which they are added; items are appended to
/// their column in the order they are placed.
#[derive(Debug, Default)]
pub struct BoardBuilder {
    columns: Vec<Column>,
    placements: Vec<(ColumnId, Item)>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the columns of a validated configuration
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            columns: config.columns.iter().map(|c| c.to_column()).collect(),
            placements: Vec::new(),
        })
    }

    pub fn column(mut self, id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        self.columns.push(Column::new(id, title));
        self
    }

    /// Places `item` at the end of `column`
    pub fn item(mut self, column: impl Into<ColumnId>, item: Item) -> Self {
        self.placements.push((column.into(), item));
        self
    }

    /// Builds the board, checking every board invariant
    pub fn build(self) -> Result<Board> {
        let Self {
            mut columns,
            placements,
        } = self;

        let mut items = Vec::with_capacity(placements.len());
        for (column_id, item) in placements {
            let column = columns
                .iter_mut()
                .find(|c| c.id == column_id)
                .ok_or_else(|| KanbanError::ColumnNotFound(column_id.to_string()))?;
            column.item_ids.push(item.id.clone());
            items.push(item);
        }

        let order: Vec<ColumnId> = columns.iter().map(|c| c.id.clone()).collect();
        Board::new(columns, order, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, Priority};

    #[test]
    fn test_builder_places_items_in_order() {
        let board = BoardBuilder::new()
            .column("todo", "To do")
            .column("done", "Done")
            .item("todo", Item::new("i1", "First"))
            .item("done", Item::new("i2", "Second"))
            .item("todo", Item::new("i3", "Third").with_priority(Priority::High))
            .build()
            .unwrap();

        let todo = board.column(&ColumnId::new("todo")).unwrap();
        assert_eq!(todo.item_ids, vec![ItemId::new("i1"), ItemId::new("i3")]);
        assert_eq!(board.columns_order()[1].as_str(), "done");
        assert_eq!(board.item(&ItemId::new("i3")).unwrap().priority, Priority::High);
    }

    #[test]
    fn test_builder_generates_ids() {
        let board = BoardBuilder::from_config(&BoardConfig::default())
            .unwrap()
            .item("todo", Item::with_generated_id("Anonymous"))
            .item("todo", Item::with_generated_id("Anonymous"))
            .build()
            .unwrap();
        assert_eq!(board.item_count(), 2);
    }

    #[test]
    fn test_builder_rejects_unknown_column() {
        let err = BoardBuilder::new()
            .column("todo", "To do")
            .item("later", Item::new("i1", "First"))
            .build()
            .unwrap_err();
        assert!(matches!(err, KanbanError::ColumnNotFound(ref id) if id == "later"));
    }

    #[test]
    fn test_builder_rejects_duplicate_items() {
        let err = BoardBuilder::new()
            .column("todo", "To do")
            .item("todo", Item::new("i1", "First"))
            .item("todo", Item::new("i1", "Again"))
            .build()
            .unwrap_err();
        assert!(matches!(err, KanbanError::DuplicateId { kind: "item", .. }));
    }
}
