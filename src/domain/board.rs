use crate::domain::item::{Item, ItemId};
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

/// Unique identifier for a board column (e.g., "todo", "in-progress")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A workflow stage holding an ordered list of item references.
///
/// `item_ids` is the only place ordering lives: the index of an id is its
/// display position. Columns reference items, they never own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default, alias = "itemsIds")]
    pub item_ids: Vec<ItemId>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            item_ids: Vec::new(),
        }
    }

    pub fn with_items<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        self.item_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    /// Returns the item id stored at `index`
    pub fn item_at(&self, index: usize) -> Option<&ItemId> {
        self.item_ids.get(index)
    }

    /// Returns the position of `id` in this column
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.item_ids.iter().position(|i| i == id)
    }
}

/// Unvalidated board contents, as handed over by a seed source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardData {
    pub columns: HashMap<ColumnId, Column>,
    pub columns_order: Vec<ColumnId>,
    pub items: HashMap<ItemId, Item>,
}

/// Kanban board state.
///
/// A `Board` is an immutable value: every transition produces a new board and
/// leaves the old one intact. Item records and the column order are shared
/// between successive boards, so a move only allocates the columns it touches.
///
/// The only ways to obtain a `Board` (construction and deserialization) check
/// the invariants in [`Board::check_invariants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BoardData")]
pub struct Board {
    columns: HashMap<ColumnId, Arc<Column>>,
    columns_order: Arc<[ColumnId]>,
    items: Arc<HashMap<ItemId, Item>>,
}

impl Board {
    /// Builds a board and validates it
    pub fn new(
        columns: impl IntoIterator<Item = Column>,
        columns_order: impl IntoIterator<Item = ColumnId>,
        items: impl IntoIterator<Item = Item>,
    ) -> Result<Self> {
        let mut column_map = HashMap::new();
        for column in columns {
            let id = column.id.clone();
            if column_map.insert(id.clone(), Arc::new(column)).is_some() {
                return Err(KanbanError::DuplicateId {
                    kind: "column",
                    id: id.to_string(),
                });
            }
        }

        let mut item_map = HashMap::new();
        for item in items {
            let id = item.id.clone();
            if item_map.insert(id.clone(), item).is_some() {
                return Err(KanbanError::DuplicateId {
                    kind: "item",
                    id: id.to_string(),
                });
            }
        }

        let board = Self {
            columns: column_map,
            columns_order: columns_order.into_iter().collect(),
            items: Arc::new(item_map),
        };
        board.check_invariants()?;
        Ok(board)
    }

    /// Gets a column by ID
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id).map(Arc::as_ref)
    }

    /// Gets an item by ID
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Left-to-right display order of the columns
    pub fn columns_order(&self) -> &[ColumnId] {
        &self.columns_order
    }

    /// Columns in display order
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns_order
            .iter()
            .filter_map(move |id| self.column(id))
    }

    /// Items of a column in stored order
    pub fn items_in(&self, column: &ColumnId) -> Option<Vec<&Item>> {
        let column = self.column(column)?;
        Some(
            column
                .item_ids
                .iter()
                .filter_map(|id| self.items.get(id))
                .collect(),
        )
    }

    /// Finds the column holding `item` and its index there
    pub fn column_of(&self, item: &ItemId) -> Option<(&ColumnId, usize)> {
        self.columns
            .values()
            .find_map(|column| column.position_of(item).map(|index| (&column.id, index)))
    }

    /// All items keyed by ID
    pub fn items(&self) -> &HashMap<ItemId, Item> {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Checks the structural invariants of the board:
    ///
    /// 1. every referenced item id exists in `items`
    /// 2. every item sits in exactly one column, exactly once
    /// 3. `columns_order` is a permutation of the column keys
    ///
    /// Map keys must also agree with the ids stored in the values.
    pub fn check_invariants(&self) -> Result<()> {
        for (key, column) in &self.columns {
            if key != &column.id {
                return Err(KanbanError::invariant(format!(
                    "column stored under '{}' has id '{}'",
                    key, column.id
                )));
            }
        }

        for (key, item) in self.items.iter() {
            if key != &item.id {
                return Err(KanbanError::invariant(format!(
                    "item stored under '{}' has id '{}'",
                    key, item.id
                )));
            }
        }

        let mut ordered = HashSet::with_capacity(self.columns_order.len());
        for id in self.columns_order.iter() {
            if !self.columns.contains_key(id) {
                return Err(KanbanError::invariant(format!(
                    "column order references unknown column '{}'",
                    id
                )));
            }
            if !ordered.insert(id) {
                return Err(KanbanError::invariant(format!(
                    "column '{}' appears more than once in column order",
                    id
                )));
            }
        }
        if let Some(missing) = self.columns.keys().find(|id| !ordered.contains(id)) {
            return Err(KanbanError::invariant(format!(
                "column '{}' is missing from column order",
                missing
            )));
        }

        let mut placed: HashMap<&ItemId, &ColumnId> = HashMap::with_capacity(self.items.len());
        for column in self.columns.values() {
            for id in &column.item_ids {
                if !self.items.contains_key(id) {
                    return Err(KanbanError::invariant(format!(
                        "column '{}' references unknown item '{}'",
                        column.id, id
                    )));
                }
                if let Some(previous) = placed.insert(id, &column.id) {
                    return Err(KanbanError::invariant(format!(
                        "item '{}' is placed in both '{}' and '{}'",
                        id, previous, column.id
                    )));
                }
            }
        }
        if let Some(orphan) = self.items.keys().find(|id| !placed.contains_key(id)) {
            return Err(KanbanError::invariant(format!(
                "item '{}' is not placed in any column",
                orphan
            )));
        }

        Ok(())
    }

    /// Returns a new board with `replacements` swapped in by column id.
    /// Everything else is shared with `self`.
    pub(crate) fn with_columns(&self, replacements: impl IntoIterator<Item = Column>) -> Self {
        let mut columns = self.columns.clone();
        for column in replacements {
            columns.insert(column.id.clone(), Arc::new(column));
        }
        Self {
            columns,
            columns_order: Arc::clone(&self.columns_order),
            items: Arc::clone(&self.items),
        }
    }

    /// Whether both boards share the same column allocation for `id`
    #[cfg(test)]
    pub(crate) fn shares_column(&self, other: &Board, id: &ColumnId) -> bool {
        match (self.columns.get(id), other.columns.get(id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn shares_items(&self, other: &Board) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl TryFrom<BoardData> for Board {
    type Error = KanbanError;

    fn try_from(data: BoardData) -> Result<Self> {
        let board = Self {
            columns: data
                .columns
                .into_iter()
                .map(|(id, column)| (id, Arc::new(column)))
                .collect(),
            columns_order: data.columns_order.into(),
            items: Arc::new(data.items),
        };
        board.check_invariants()?;
        Ok(board)
    }
}

impl From<&Board> for BoardData {
    fn from(board: &Board) -> Self {
        Self {
            columns: board
                .columns
                .iter()
                .map(|(id, column)| (id.clone(), Column::clone(column)))
                .collect(),
            columns_order: board.columns_order.to_vec(),
            items: HashMap::clone(&board.items),
        }
    }
}
