//! Name/reference catalog index, fetched once at startup.

use crate::api::ApiClient;
use serde::Deserialize;

/// One entry of the remote catalog: a canonical name plus the url of its
/// detail resource.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

impl CatalogEntry {
    /// Numeric id embedded as the second-to-last segment of the url path.
    ///
    /// Returned as the raw string so that id matching is exact string
    /// equality (leading zeros never match).
    pub fn reference_id(&self) -> Option<&str> {
        let mut segments = self.url.split('/').rev();
        segments.next()?;
        segments.next()
    }
}

/// Ordered, immutable sequence of catalog entries.
///
/// Loaded with a single request at startup and never mutated afterwards.
/// A failed load yields an empty catalog; search over it finds nothing.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Fetches the full catalog in one request.
    ///
    /// On failure the error is logged and the catalog is left empty; the
    /// caller proceeds without results rather than failing startup. No retry.
    pub fn load(client: &ApiClient) -> Self {
        match client.fetch_catalog() {
            Ok(entries) => Self { entries },
            Err(err) => {
                tracing::error!(error = %err, "catalog load failed; continuing with empty catalog");
                Self::empty()
            }
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
