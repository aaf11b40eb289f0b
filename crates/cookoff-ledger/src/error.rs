use thiserror::Error;

use cookoff_shared::types::{AudienceId, ChefId};
use cookoff_store::StoreError;

/// Errors produced by ledger operations.
///
/// Not-found variants are expected, recoverable outcomes the caller branches
/// on; only `Store` signals something genuinely wrong underneath.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The referenced chef does not exist.
    #[error("Chef not found: {0}")]
    ChefNotFound(ChefId),

    /// The referenced audience member does not exist.
    #[error("Audience member not found: {0}")]
    AudienceNotFound(AudienceId),

    /// The underlying collection store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LedgerError>;
