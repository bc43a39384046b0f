use crate::{
    domain::Board,
    error::{KanbanError, Result},
    seed::SeedSource,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Seed read from a JSON board document.
///
/// The document has the same shape as a serialized [`Board`]:
/// `columns`, `columnsOrder` and `items`.
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeedSource for FileSeed {
    async fn load_board(&self) -> Result<Board> {
        if !self.path.exists() {
            return Err(KanbanError::SeedNotFound(self.path.display().to_string()));
        }

        let contents = fs::read_to_string(&self.path).await?;
        let board: Board = serde_json::from_str(&contents)?;

        info!(
            path = %self.path.display(),
            columns = board.column_count(),
            items = board.item_count(),
            "loaded seed board"
        );
        Ok(board)
    }
}
