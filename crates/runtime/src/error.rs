//! Runtime errors.

use rpg_core::{ErrorSeverity, GameError, ItemId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A strict session met a command naming an item missing from the catalog.
    #[error("command {index} references unknown item {id}")]
    UnknownItem { index: usize, id: ItemId },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownItem { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem { .. } => "RUNTIME_UNKNOWN_ITEM",
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
