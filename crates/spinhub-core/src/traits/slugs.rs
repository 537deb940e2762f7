//! Slug collision probing against the persistence layer.

use async_trait::async_trait;

use crate::result::AppResult;

/// Lookup seam used during slug allocation.
///
/// One directory exists per entity type (companies and influencers each
/// keep their own namespace), so uniqueness is scoped to the directory a
/// caller probes. Implemented by the embedding application's persistence
/// layer; an in-memory implementation ships with the links crate.
#[async_trait]
pub trait SlugDirectory: Send + Sync {
    /// Returns whether the given slug is already taken in this directory.
    async fn slug_exists(&self, slug: &str) -> AppResult<bool>;
}
