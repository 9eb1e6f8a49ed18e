//! In-memory record store for tea entries.

mod memory;
mod types;

pub use memory::InMemoryTeaStore;
pub use types::{Tea, TeaDraft, TeaId};

use async_trait::async_trait;

/// Storage operations required by the HTTP surface.
///
/// Every method completes in a single step; callers never observe a partially applied change.
#[async_trait]
pub trait TeaRepository: Send + Sync {
    /// Append a new record, assigning it the next identifier.
    async fn insert(&self, draft: TeaDraft) -> Tea;

    /// Return every record in insertion order.
    async fn list(&self) -> Vec<Tea>;

    /// Look up a record by identifier.
    async fn find(&self, id: TeaId) -> Option<Tea>;

    /// Overwrite `name` and `price` of an existing record. Fields absent from `draft` become absent.
    async fn update(&self, id: TeaId, draft: TeaDraft) -> Option<Tea>;

    /// Remove a record, returning it so callers can report what was deleted.
    async fn remove(&self, id: TeaId) -> Option<Tea>;
}
