//! Drag-and-drop move resolution.
//!
//! [`resolve_move`] turns the current board plus one [`DropEvent`] into the
//! next board. It is a pure function: the input board is never touched, and a
//! rejected event leaves the caller holding the board it already had.

use crate::domain::{
    board::{Board, Column},
    drop_event::{DropEvent, DropLocation},
};
use crate::error::{KanbanError, Result};
use tracing::{debug, warn};

/// Why a drop required no state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// The gesture ended without a destination
    Cancelled,
    /// The item was released at the slot it was picked up from
    SamePosition,
}

/// Result of resolving a valid drop
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    Moved(Board),
    Unchanged(NoOpReason),
}

impl MoveOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Unchanged(_))
    }

    /// The board to hold after this outcome, falling back to `current`
    pub fn into_board(self, current: &Board) -> Board {
        match self {
            Self::Moved(board) => board,
            Self::Unchanged(_) => current.clone(),
        }
    }
}

/// Computes the board that results from `drop`.
///
/// Within one column the item is removed first and then inserted, so the
/// destination index addresses the list with the item already taken out:
/// moving index 0 to index 1 in `[a, b, c]` yields `[b, a, c]`.
///
/// Across columns the item is removed from the source and inserted into the
/// destination as it currently stands.
///
/// # Errors
/// Returns [`KanbanError::InvalidMove`] when a column is unknown, the item is
/// not at the claimed source slot, the destination index is past the end of
/// the list it is inserted into, or the computed board would break a board
/// invariant.
pub fn resolve_move(board: &Board, drop: &DropEvent) -> Result<MoveOutcome> {
    let Some(destination) = drop.destination() else {
        debug!(item = %drop.moved_item_id, "drop cancelled");
        return Ok(MoveOutcome::Unchanged(NoOpReason::Cancelled));
    };

    if drop.is_in_place() {
        debug!(item = %drop.moved_item_id, "drop released in place");
        return Ok(MoveOutcome::Unchanged(NoOpReason::SamePosition));
    }

    let source = board.column(&drop.source_column_id).ok_or_else(|| {
        KanbanError::invalid_move(format!(
            "source column '{}' does not exist",
            drop.source_column_id
        ))
    })?;

    if board.item(&drop.moved_item_id).is_none() {
        return Err(KanbanError::invalid_move(format!(
            "item '{}' does not exist",
            drop.moved_item_id
        )));
    }

    match source.item_at(drop.source_index) {
        Some(id) if id == &drop.moved_item_id => {}
        Some(other) => {
            return Err(KanbanError::invalid_move(format!(
                "expected '{}' at {}[{}], found '{}'",
                drop.moved_item_id, source.id, drop.source_index, other
            )))
        }
        None => {
            return Err(KanbanError::invalid_move(format!(
                "source index {} is out of range for column '{}' ({} items)",
                drop.source_index,
                source.id,
                source.len()
            )))
        }
    }

    let next = if destination.column_id == source.id {
        board.with_columns([reorder_within(source, drop.source_index, destination.index)?])
    } else {
        let target = board.column(&destination.column_id).ok_or_else(|| {
            KanbanError::invalid_move(format!(
                "destination column '{}' does not exist",
                destination.column_id
            ))
        })?;
        let (source, target) = transfer(source, drop.source_index, target, destination.index)?;
        board.with_columns([source, target])
    };

    if let Err(violation) = next.check_invariants() {
        warn!(item = %drop.moved_item_id, %violation, "refusing inconsistent move result");
        return Err(KanbanError::invalid_move(format!(
            "result would corrupt the board: {}",
            violation
        )));
    }

    debug!(
        item = %drop.moved_item_id,
        from = %format_location(&drop.source()),
        to = %format_location(&destination),
        "resolved move"
    );
    Ok(MoveOutcome::Moved(next))
}

/// Resolves `drop` and returns the board the caller should hold next.
///
/// No-ops and rejected drops both return `board` unchanged; rejections are
/// logged and otherwise discarded.
pub fn apply_drop(board: &Board, drop: &DropEvent) -> Board {
    match resolve_move(board, drop) {
        Ok(outcome) => outcome.into_board(board),
        Err(err) => {
            warn!(item = %drop.moved_item_id, error = %err, "discarding drop");
            board.clone()
        }
    }
}

fn reorder_within(column: &Column, from: usize, to: usize) -> Result<Column> {
    let mut item_ids = column.item_ids.clone();
    let moved = item_ids.remove(from);
    if to > item_ids.len() {
        return Err(KanbanError::invalid_move(format!(
            "destination index {} is out of range for column '{}' ({} items after removal)",
            to,
            column.id,
            item_ids.len()
        )));
    }
    item_ids.insert(to, moved);

    Ok(Column {
        id: column.id.clone(),
        title: column.title.clone(),
        item_ids,
    })
}

fn transfer(source: &Column, from: usize, target: &Column, to: usize) -> Result<(Column, Column)> {
    if to > target.len() {
        return Err(KanbanError::invalid_move(format!(
            "destination index {} is out of range for column '{}' ({} items)",
            to,
            target.id,
            target.len()
        )));
    }

    let mut source_ids = source.item_ids.clone();
    let moved = source_ids.remove(from);
    let mut target_ids = target.item_ids.clone();
    target_ids.insert(to, moved);

    Ok((
        Column {
            id: source.id.clone(),
            title: source.title.clone(),
            item_ids: source_ids,
        },
        Column {
            id: target.id.clone(),
            title: target.title.clone(),
            item_ids: target_ids,
        },
    ))
}

fn format_location(location: &DropLocation) -> String {
    format!("{}[{}]", location.column_id, location.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        board::ColumnId,
        item::{Item, ItemId},
    };

    fn board(columns: &[(&str, &[&str])]) -> Board {
        let items = columns
            .iter()
            .flat_map(|(_, ids)| ids.iter())
            .map(|id| Item::new(*id, format!("Item {}", id)));
        Board::new(
            columns
                .iter()
                .map(|(id, ids)| Column::new(*id, id.to_uppercase()).with_items(ids.iter().copied())),
            columns.iter().map(|(id, _)| ColumnId::new(*id)),
            items,
        )
        .expect("test board is valid")
    }

    fn ids(board: &Board, column: &str) -> Vec<String> {
        board
            .column(&ColumnId::new(column))
            .unwrap()
            .item_ids
            .iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    fn moved(board: &Board, drop: &DropEvent) -> Board {
        match resolve_move(board, drop).expect("move is valid") {
            MoveOutcome::Moved(next) => next,
            other => panic!("expected a move, got {:?}", other),
        }
    }

    fn drop(item: &str, from: (&str, usize), to: (&str, usize)) -> DropEvent {
        DropEvent::new(
            item,
            DropLocation::new(from.0, from.1),
            DropLocation::new(to.0, to.1),
        )
    }

    #[test]
    fn test_same_column_move_to_end() {
        let before = board(&[("a", &["i1", "i2", "i3"])]);
        let after = moved(&before, &drop("i1", ("a", 0), ("a", 2)));
        assert_eq!(ids(&after, "a"), vec!["i2", "i3", "i1"]);
    }

    #[test]
    fn test_same_column_forward_shift_removes_before_inserting() {
        let before = board(&[("a", &["i1", "i2", "i3"])]);
        let after = moved(&before, &drop("i1", ("a", 0), ("a", 1)));
        assert_eq!(ids(&after, "a"), vec!["i2", "i1", "i3"]);
    }

    #[test]
    fn test_same_column_move_backwards() {
        let before = board(&[("a", &["i1", "i2", "i3"])]);
        let after = moved(&before, &drop("i3", ("a", 2), ("a", 0)));
        assert_eq!(ids(&after, "a"), vec!["i3", "i1", "i2"]);
    }

    #[test]
    fn test_cross_column_move() {
        let before = board(&[("a", &["i1", "i2"]), ("b", &["i3"])]);
        let outcome = resolve_move(&before, &drop("i1", ("a", 0), ("b", 1))).unwrap();
        assert!(!outcome.is_noop());
        let after = outcome.into_board(&before);
        assert_eq!(ids(&after, "a"), vec!["i2"]);
        assert_eq!(ids(&after, "b"), vec!["i3", "i1"]);
    }

    #[test]
    fn test_cross_column_move_into_empty_column() {
        let before = board(&[("a", &["i1"]), ("b", &[])]);
        let after = moved(&before, &drop("i1", ("a", 0), ("b", 0)));
        assert!(ids(&after, "a").is_empty());
        assert_eq!(ids(&after, "b"), vec!["i1"]);
    }

    #[test]
    fn test_cross_column_same_index_is_not_a_noop() {
        let before = board(&[("a", &["i1"]), ("b", &["i2"])]);
        let after = moved(&before, &drop("i1", ("a", 0), ("b", 0)));
        assert_eq!(ids(&after, "b"), vec!["i1", "i2"]);
    }

    #[test]
    fn test_input_board_is_left_untouched() {
        let before = board(&[("a", &["i1", "i2"]), ("b", &["i3"])]);
        let snapshot = before.clone();
        let _ = moved(&before, &drop("i2", ("a", 1), ("b", 0)));
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_untouched_state_is_shared() {
        let before = board(&[("a", &["i1"]), ("b", &["i2"]), ("c", &["i3"])]);
        let after = moved(&before, &drop("i1", ("a", 0), ("b", 1)));

        assert!(after.shares_column(&before, &ColumnId::new("c")));
        assert!(!after.shares_column(&before, &ColumnId::new("a")));
        assert!(after.shares_items(&before));
        assert_eq!(after.columns_order(), before.columns_order());
    }

    #[test]
    fn test_cancelled_drop_is_noop() {
        let before = board(&[("a", &["i1"])]);
        let drop = DropEvent::cancelled("i1", DropLocation::new("a", 0));
        assert_eq!(
            resolve_move(&before, &drop).unwrap(),
            MoveOutcome::Unchanged(NoOpReason::Cancelled)
        );
    }

    #[test]
    fn test_in_place_drop_is_noop() {
        let before = board(&[("a", &["i1", "i2"])]);
        let outcome = resolve_move(&before, &drop("i2", ("a", 1), ("a", 1))).unwrap();
        assert_eq!(outcome, MoveOutcome::Unchanged(NoOpReason::SamePosition));
        assert!(outcome.is_noop());
        assert_eq!(outcome.into_board(&before), before);
    }

    #[test]
    fn test_rejects_item_not_at_source_index() {
        let before = board(&[("a", &["i1", "i2"])]);
        let err = resolve_move(&before, &drop("i1", ("a", 1), ("a", 0))).unwrap_err();
        assert!(err.is_rejected_move());
        assert!(err.to_string().contains("found 'i2'"));
    }

    #[test]
    fn test_rejects_source_index_out_of_range() {
        let before = board(&[("a", &["i1"])]);
        let err = resolve_move(&before, &drop("i1", ("a", 4), ("a", 0))).unwrap_err();
        assert!(err.is_rejected_move());
    }

    #[test]
    fn test_rejects_unknown_columns() {
        let before = board(&[("a", &["i1"])]);
        assert!(resolve_move(&before, &drop("i1", ("zz", 0), ("a", 0)))
            .unwrap_err()
            .is_rejected_move());
        assert!(resolve_move(&before, &drop("i1", ("a", 0), ("zz", 0)))
            .unwrap_err()
            .is_rejected_move());
    }

    #[test]
    fn test_rejects_unknown_item() {
        let before = board(&[("a", &["i1"])]);
        let err = resolve_move(&before, &drop("ghost", ("a", 0), ("a", 1))).unwrap_err();
        assert!(err.to_string().contains("'ghost' does not exist"));
    }

    #[test]
    fn test_destination_index_bounds() {
        let before = board(&[("a", &["i1", "i2"]), ("b", &["i3"])]);

        // Appending is allowed; one past the end is not.
        let appended = moved(&before, &drop("i1", ("a", 0), ("b", 1)));
        assert_eq!(ids(&appended, "b"), vec!["i3", "i1"]);
        assert!(resolve_move(&before, &drop("i1", ("a", 0), ("b", 2))).is_err());

        // Within a column the bound is the length after removal.
        let last = moved(&before, &drop("i1", ("a", 0), ("a", 1)));
        assert_eq!(ids(&last, "a"), vec!["i2", "i1"]);
        assert!(resolve_move(&before, &drop("i1", ("a", 0), ("a", 2))).is_err());
    }

    #[test]
    fn test_apply_drop_keeps_board_on_rejection() {
        let before = board(&[("a", &["i1", "i2"])]);
        let after = apply_drop(&before, &drop("i2", ("a", 0), ("a", 1)));
        assert_eq!(after, before);
    }

    #[test]
    fn test_apply_drop_returns_next_board() {
        let before = board(&[("a", &["i1", "i2"])]);
        let after = apply_drop(&before, &drop("i2", ("a", 1), ("a", 0)));
        assert_eq!(ids(&after, "a"), vec!["i2", "i1"]);
        assert_eq!(after.column_of(&ItemId::new("i2")).unwrap().1, 0);
    }
}
