use crate::domain::{
    board::Board,
    drop_event::DropEvent,
    resolver::{resolve_move, MoveOutcome, NoOpReason},
};
use crate::error::KanbanError;
use std::sync::Arc;
use tracing::warn;

/// What happened to a drop handed to a [`BoardSession`]
#[derive(Debug)]
pub enum DropReport {
    /// A new board was swapped in
    Moved { revision: u64 },
    /// The drop needed no change
    Unchanged(NoOpReason),
    /// The drop did not match the current board and was discarded
    Rejected(KanbanError),
}

impl DropReport {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Holder of the current board for a rendering layer.
///
/// The board is replaced wholesale on every resolved move, never edited in
/// place. Readers that cloned an earlier [`Arc<Board>`] keep a consistent
/// snapshot; `revision` increases by one per replacement.
#[derive(Debug, Clone)]
pub struct BoardSession {
    current: Arc<Board>,
    revision: u64,
}

impl BoardSession {
    pub fn new(board: Board) -> Self {
        Self {
            current: Arc::new(board),
            revision: 0,
        }
    }

    /// The board to render
    pub fn current(&self) -> Arc<Board> {
        Arc::clone(&self.current)
    }

    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resolves a completed drag against the current board
    pub fn handle_drop(&mut self, drop: &DropEvent) -> DropReport {
        match resolve_move(&self.current, drop) {
            Ok(MoveOutcome::Moved(next)) => {
                self.current = Arc::new(next);
                self.revision += 1;
                DropReport::Moved {
                    revision: self.revision,
                }
            }
            Ok(MoveOutcome::Unchanged(reason)) => DropReport::Unchanged(reason),
            Err(err) => {
                warn!(
                    item = %drop.moved_item_id,
                    revision = self.revision,
                    error = %err,
                    "rejected drop"
                );
                DropReport::Rejected(err)
            }
        }
    }
}
