//! In-memory slug directory.

use async_trait::async_trait;
use dashmap::DashSet;

use spinhub_core::result::AppResult;
use spinhub_core::traits::SlugDirectory;

/// Keeps allocated slugs in process memory.
///
/// Production deployments probe their database through their own
/// [`SlugDirectory`] implementation; this one backs tests, demos, and
/// single-process tools.
#[derive(Debug, Default)]
pub struct MemorySlugDirectory {
    slugs: DashSet<String>,
}

impl MemorySlugDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a slug as taken. Returns `false` when it was already present.
    pub fn insert(&self, slug: impl Into<String>) -> bool {
        self.slugs.insert(slug.into())
    }

    /// Number of recorded slugs.
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Whether no slugs are recorded.
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

#[async_trait]
impl SlugDirectory for MemorySlugDirectory {
    async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        Ok(self.slugs.contains(slug))
    }
}
