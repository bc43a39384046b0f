use crate::{domain::Board, error::Result};
use async_trait::async_trait;

pub mod builder;
pub mod file_seed;

pub use builder::BoardBuilder;
pub use file_seed::FileSeed;

/// Source of the initial board.
///
/// Seeds are read once at startup; the board is never written back.
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Loads and validates the initial board
    async fn load_board(&self) -> Result<Board>;
}

/// Seed backed by a board already held in memory
#[derive(Debug, Clone)]
pub struct StaticSeed {
    board: Board,
}

impl StaticSeed {
    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    async fn load_board(&self) -> Result<Board> {
        Ok(self.board.clone())
    }
}
