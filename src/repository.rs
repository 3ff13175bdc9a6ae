//! The query/command seam the table presentation core depends on.
//!
//! The core never talks to axum or sea-orm directly; it sees only this trait.
//! [`crate::client::HttpItemClient`] implements it over the JSON transport.

use crate::models::{Category, Item, ItemDraft};
use async_trait::async_trait;

/// Failure taxonomy for repository calls. Failures are values surfaced to the
/// caller, never panics; retries are user-initiated.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Transport or connection failure before a response arrived.
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server failure: HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// The update target does not exist.
    #[error("item {0} not found")]
    NotFound(i64),

    /// Malformed input detected before submission.
    #[error("invalid input: {0}")]
    Validation(String),
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, with derived submit-by dates.
    async fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    /// Creates an item and returns the authoritative stored row.
    async fn create(&self, draft: ItemDraft) -> Result<Item, RepositoryError>;

    /// Replaces an item's full editable field set and returns the
    /// authoritative post-write row.
    async fn update(&self, id: i64, draft: ItemDraft) -> Result<Item, RepositoryError>;

    /// The category lookup relation.
    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError>;
}
