//! Persisting an assembled dataset into the ownership store.
//!
//! The store is only addressed through natural keys: holders are looked
//! up or inserted by `(holder_name, ticker)`, and every portfolio
//! re-resolves its holder by name through the same ranked matching the
//! pipeline's linker uses. Arena indices from assembly never cross this
//! boundary.

mod api;
mod wire;

use crate::core::{OwnershipError, StoreClient};
use crate::dataset::OwnershipDataset;

/// A builder for writing one dataset into the store.
pub struct UpsertBuilder {
    client: StoreClient,
}

/// Counts reported after an upsert run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpsertReport {
    /// Holders looked up or inserted, then written.
    pub holders_written: usize,
    /// Portfolios inserted with a re-resolved holder.
    pub portfolios_written: usize,
    /// Portfolios skipped because no stored holder matched their name.
    pub portfolios_unresolved: usize,
    /// Individual records that failed to persist.
    pub record_failures: usize,
    /// Whether the derived summary view refreshed.
    pub summary_refreshed: bool,
}

impl UpsertBuilder {
    /// Creates a new `UpsertBuilder` over the given store client.
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Writes the dataset.
    ///
    /// Row-level failures are counted in the report, not raised; only
    /// client-side problems (URL construction, a request that cannot be
    /// built) abort the run.
    pub async fn run(&self, dataset: &OwnershipDataset) -> Result<UpsertReport, OwnershipError> {
        api::upsert_dataset(&self.client, dataset).await
    }
}
