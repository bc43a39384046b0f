use crate::domain::board::{Column, ColumnId};
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for a single board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: ColumnId,
    pub title: String,
}

impl ColumnConfig {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// An empty column for this configuration
    pub fn to_column(&self) -> Column {
        Column::new(self.id.clone(), self.title.clone())
    }
}

/// Board configuration: a name and the columns in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<ColumnConfig>,
}

impl BoardConfig {
    /// Parses a configuration from JSON and validates it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that column ids are non-empty and unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.id.as_str().trim().is_empty() {
                return Err(KanbanError::ConfigError(format!(
                    "column '{}' has an empty id",
                    column.title
                )));
            }
            if !seen.insert(&column.id) {
                return Err(KanbanError::ConfigError(format!(
                    "column id '{}' is configured more than once",
                    column.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            columns: vec![
                ColumnConfig::new("todo", "To do"),
                ColumnConfig::new("in-progress", "In progress"),
                ColumnConfig::new("done", "Done"),
            ],
        }
    }
}
