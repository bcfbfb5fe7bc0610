//! Object catalog cache.
//!
//! The sorted list of known object names is fetched once and served from
//! memory until [`Catalog::invalidate`] is called. The cache is an explicit
//! object rather than hidden memoization so its lifetime is visible to the
//! shell's `update` command and to tests. Single-threaded by design, hence
//! no interior locking.

use tracing::info;

use crate::graph::ObjectStore;
use crate::types::Result;

/// Cached catalog of known object names.
#[derive(Debug, Default)]
pub struct Catalog {
    names: Option<Vec<String>>,
}

impl Catalog {
    /// Create an empty (unpopulated) catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the catalog names, fetching from the store on first use.
    ///
    /// # Errors
    ///
    /// Propagates the store error when the initial fetch fails; the cache
    /// stays unpopulated in that case.
    pub async fn get(&mut self, store: &dyn ObjectStore) -> Result<&[String]> {
        if self.names.is_none() {
            let names = store.object_names().await?;
            info!(count = names.len(), "object catalog populated");
            self.names = Some(names);
        }
        // populated above, or already present
        Ok(self.names.as_deref().unwrap_or_default())
    }

    /// Drop the cached names; the next `get` refetches.
    pub fn invalidate(&mut self) {
        info!("object catalog invalidated");
        self.names = None;
    }

    /// Whether the catalog currently holds a cached copy.
    pub fn is_populated(&self) -> bool {
        self.names.is_some()
    }
}
