use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Invalid move: {reason}")]
    InvalidMove { reason: String },

    #[error("Board invariant violated: {reason}")]
    InvariantViolation { reason: String },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate {kind} ID: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Invalid priority '{0}'. Valid priorities: low, medium, high")]
    InvalidPriority(String),

    #[error("Seed file not found: {0}")]
    SeedNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl KanbanError {
    pub(crate) fn invalid_move(reason: impl Into<String>) -> Self {
        Self::InvalidMove {
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }

    /// Whether the error means a drop was rejected and the previous board stands
    pub fn is_rejected_move(&self) -> bool {
        matches!(self, Self::InvalidMove { .. })
    }
}
