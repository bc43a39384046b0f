//! # Kanboard Core
//!
//! Board model and drag-and-drop move resolution for kanban boards.
//!
//! A [`Board`] is an immutable value holding columns, their display order and
//! the items they reference. A gesture layer reports a completed drag as a
//! [`DropEvent`]; [`resolve_move`] computes the next board, or reports a no-op
//! or an invalid move. Rendering, gesture capture and persistence live outside
//! this crate.

pub mod domain;
pub mod error;
pub mod seed;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardData, Column, ColumnId},
    config::{BoardConfig, ColumnConfig},
    drop_event::{DropEvent, DropLocation},
    filter::{filter_items, ColumnView, SearchFilter},
    item::{Item, ItemId, Priority},
    resolver::{apply_drop, resolve_move, MoveOutcome, NoOpReason},
    session::{BoardSession, DropReport},
};
pub use error::{KanbanError, Result};
pub use seed::{BoardBuilder, FileSeed, SeedSource, StaticSeed};
