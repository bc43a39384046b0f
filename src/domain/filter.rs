use crate::domain::{
    board::{Board, Column},
    item::Item,
};

/// Case-insensitive title search used to narrow what a column displays.
///
/// Filtering is presentational only. Stored order is never derived from a
/// filtered list, and drop indices always refer to the unfiltered column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    needle: Option<String>,
}

impl SearchFilter {
    /// Builds a filter from an optional term; empty terms match everything
    pub fn new(term: Option<&str>) -> Self {
        let needle = term
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);
        Self { needle }
    }

    /// A filter that keeps every item
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    pub fn matches(&self, item: &Item) -> bool {
        match &self.needle {
            Some(needle) => item.title_contains_lowercase(needle),
            None => true,
        }
    }
}

impl From<&str> for SearchFilter {
    fn from(term: &str) -> Self {
        Self::new(Some(term))
    }
}

/// Returns the items that pass `filter`, keeping their order
pub fn filter_items<'a, I>(items: I, filter: &SearchFilter) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items.into_iter().filter(|item| filter.matches(item)).collect()
}

/// What a renderer needs to draw one column.
///
/// Only [`Board::view`] builds these, so the visible items are always a
/// subsequence of the column.
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    column: &'a Column,
    items: Vec<&'a Item>,
}

impl<'a> ColumnView<'a> {
    pub fn column(&self) -> &'a Column {
        self.column
    }

    /// Visible items, in stored order
    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    /// Maps a position in the visible list to the column's stored position.
    ///
    /// Gesture layers that only see the filtered list must translate indices
    /// through this before building a drop event.
    pub fn unfiltered_index(&self, visible_index: usize) -> Option<usize> {
        let item = self.items.get(visible_index)?;
        self.column.position_of(&item.id)
    }

    pub fn hidden_count(&self) -> usize {
        self.column.len().saturating_sub(self.items.len())
    }
}

impl Board {
    /// Per-column display lists in column order
    pub fn view(&self, filter: &SearchFilter) -> Vec<ColumnView<'_>> {
        self.ordered_columns()
            .map(|column| ColumnView {
                column,
                items: filter_items(
                    column.item_ids.iter().filter_map(|id| self.item(id)),
                    filter,
                ),
            })
            .collect()
    }
}
