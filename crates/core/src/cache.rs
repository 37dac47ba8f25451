//! Capability trait for the per-entity local cache stores.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::errors::Result;

/// A key-indexed local table mirroring one entity collection.
///
/// Implementations guarantee that `replace_all` is atomic from the
/// observer's standpoint: a subscriber of [`CacheStore::observe_all`] sees
/// either the table as it was before the call or the complete replacement,
/// never a partially cleared table. Rows sharing an identity in the input
/// collapse to one row, last write wins.
#[async_trait]
pub trait CacheStore<R>: Send + Sync {
    /// Clear the table and insert `rows` as a single transactional unit.
    async fn replace_all(&self, rows: Vec<R>) -> Result<()>;

    /// A live, restartable stream of whole snapshots in the store's
    /// documented order. Emissions are delivered in the order their writes
    /// committed; delivery context is the subscriber's.
    fn observe_all(&self) -> watch::Receiver<Vec<R>>;

    /// Empty the table. Used on sign-out or explicit invalidation.
    async fn clear(&self) -> Result<()>;
}
