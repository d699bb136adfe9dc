use critterdex_core::{ApiClient, CatalogEntry, DetailRecord, Result};

/// Seam between the coordinator and whatever fetches detail pairs.
///
/// One call covers both remote lookups for a candidate (detail resource,
/// then the species resource keyed by the detail's id) plus record
/// construction, so the coordinator's cancellation check sits naturally
/// between candidates.
pub trait DetailSource: Send + Sync {
    fn fetch(&self, entry: &CatalogEntry) -> Result<DetailRecord>;
}

impl DetailSource for ApiClient {
    fn fetch(&self, entry: &CatalogEntry) -> Result<DetailRecord> {
        Ok(self.detail_record(entry)?)
    }
}
