//! Controller error types

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::favorites::StoreError;
use crate::source::SourceError;

/// Errors surfaced by controller operations
#[derive(Error, Debug)]
pub enum AppError {
    /// Input did not match the catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Upstream fetch failed
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Favorites could not be persisted
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// No record in the dataset has this id or name
    #[error("No Pokemon matches {0:?}")]
    NoMatch(String),

    /// Operation needs an open detail panel
    #[error("No detail view is open")]
    NoDetailOpen,

    /// Evolution stage index out of range (1-based)
    #[error("Evolution stage {0} is not available")]
    UnknownStage(usize),
}

/// Result type alias for controller operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::from(CatalogError::UnknownType("shadow".into()));
        assert_eq!(err.to_string(), "Unknown type: shadow");

        let err = AppError::from(SourceError::Decode("bad json".into()));
        assert_eq!(err.to_string(), "Source error: Decode failure: bad json");
    }
}
