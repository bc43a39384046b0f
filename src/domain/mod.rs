pub mod board;
pub mod config;
pub mod drop_event;
pub mod filter;
pub mod item;
pub mod resolver;
pub mod session;

pub use board::{Board, BoardData, Column, ColumnId};
pub use config::{BoardConfig, ColumnConfig};
pub use drop_event::{DropEvent, DropLocation};
pub use filter::{filter_items, ColumnView, SearchFilter};
pub use item::{Item, ItemId, Priority};
pub use resolver::{apply_drop, resolve_move, MoveOutcome, NoOpReason};
pub use session::{BoardSession, DropReport};
