use crate::domain::{board::ColumnId, item::ItemId};
use serde::{Deserialize, Serialize};

/// A slot on the board: a column and a position in its stored (unfiltered) order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropLocation {
    pub column_id: ColumnId,
    pub index: usize,
}

impl DropLocation {
    pub fn new(column_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

/// A completed drag gesture, as reported by the gesture layer.
///
/// The destination is absent when the gesture was cancelled or the item was
/// released outside every column. A destination with only one of its two
/// fields set is treated the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    pub source_column_id: ColumnId,
    pub source_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_column_id: Option<ColumnId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_index: Option<usize>,
    pub moved_item_id: ItemId,
}

impl DropEvent {
    /// A drop that landed on `destination`
    pub fn new(item: impl Into<ItemId>, source: DropLocation, destination: DropLocation) -> Self {
        Self {
            source_column_id: source.column_id,
            source_index: source.index,
            dest_column_id: Some(destination.column_id),
            dest_index: Some(destination.index),
            moved_item_id: item.into(),
        }
    }

    /// A drag that ended without a destination
    pub fn cancelled(item: impl Into<ItemId>, source: DropLocation) -> Self {
        Self {
            source_column_id: source.column_id,
            source_index: source.index,
            dest_column_id: None,
            dest_index: None,
            moved_item_id: item.into(),
        }
    }

    pub fn source(&self) -> DropLocation {
        DropLocation::new(self.source_column_id.clone(), self.source_index)
    }

    /// The destination slot, present only when both column and index are set
    pub fn destination(&self) -> Option<DropLocation> {
        match (&self.dest_column_id, self.dest_index) {
            (Some(column), Some(index)) => Some(DropLocation::new(column.clone(), index)),
            _ => None,
        }
    }

    /// Whether the item would be dropped exactly where it was picked up
    pub fn is_in_place(&self) -> bool {
        self.dest_column_id.as_ref() == Some(&self.source_column_id)
            && self.dest_index == Some(self.source_index)
    }
}
