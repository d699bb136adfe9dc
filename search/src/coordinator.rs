use crate::config::SearchConfig;
use crate::query::SearchQuery;
use crate::results::SearchResults;
use crate::source::DetailSource;
use critterdex_core::{Catalog, CatalogEntry, DetailRecord};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

/// Monotonic id tagging one search invocation's entire fetch batch.
pub type Generation = u64;

/// Visible state owned by whichever generation is currently latest.
struct VisibleState {
    records: Vec<DetailRecord>,
    loading: bool,
}

/// State shared with the per-generation fetch workers.
struct Shared {
    /// Latest-issued generation id. Written only by the coordinator;
    /// workers read it at every cancellation point.
    latest: AtomicU64,
    state: Mutex<VisibleState>,
    notify: Arc<dyn Fn() + Send + Sync>,
}

/// Drives incremental search over a loaded catalog.
///
/// Each query change (or catalog replacement) mints a new generation and
/// hands its candidate list to a background worker. Workers from superseded
/// generations abort cooperatively and never touch the visible state. The
/// `notify` callback is invoked whenever the visible results or loading flag
/// change; callers read the current state through `results()`.
pub struct SearchCoordinator {
    catalog: Catalog,
    source: Arc<dyn DetailSource>,
    config: SearchConfig,
    query_text: String,
    shared: Arc<Shared>,
}

impl SearchCoordinator {
    pub fn new(
        catalog: Catalog,
        source: Arc<dyn DetailSource>,
        config: SearchConfig,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        Self {
            catalog,
            source,
            config,
            query_text: String::new(),
            shared: Arc::new(Shared {
                latest: AtomicU64::new(0),
                state: Mutex::new(VisibleState {
                    records: Vec::new(),
                    loading: false,
                }),
                notify,
            }),
        }
    }

    /// Stores the query text and triggers a new search.
    pub fn set_query(&mut self, text: &str) {
        self.query_text = text.to_string();
        self.trigger();
    }

    /// Replaces the catalog and re-runs the stored query against it.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.trigger();
    }

    /// Latest-issued generation id.
    pub fn latest_generation(&self) -> Generation {
        self.shared.latest.load(Ordering::SeqCst)
    }

    /// Point-in-time snapshot of the visible records and loading flag.
    pub fn results(&self) -> SearchResults {
        let state = self.shared.state.lock();
        SearchResults::new(state.records.clone(), state.loading)
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.lock().loading
    }

    fn trigger(&mut self) {
        match SearchQuery::parse(&self.query_text, self.config.min_query_len) {
            SearchQuery::TooShort => {
                // Supersede any in-flight batch before clearing, so a stale
                // worker cannot repopulate the emptied list.
                self.shared.latest.fetch_add(1, Ordering::SeqCst);
                {
                    let mut state = self.shared.state.lock();
                    state.records.clear();
                    state.loading = false;
                }
                (self.shared.notify)();
            }
            query => {
                let generation = self.shared.latest.fetch_add(1, Ordering::SeqCst) + 1;
                let candidates: Vec<CatalogEntry> = self
                    .catalog
                    .entries()
                    .iter()
                    .filter(|entry| query.matches(entry))
                    .cloned()
                    .collect();
                {
                    let mut state = self.shared.state.lock();
                    state.records.clear();
                    state.loading = true;
                }
                (self.shared.notify)();

                let shared = Arc::clone(&self.shared);
                let source = Arc::clone(&self.source);
                thread::spawn(move || run_fetch_loop(shared, source, candidates, generation));
            }
        }
    }
}

/// Fetches one generation's candidates sequentially, in catalog order.
///
/// The latest-generation id is re-read before each candidate's fetch pair;
/// on mismatch the whole remaining sequence is abandoned with no further
/// fetches and no state mutation. Appends and the final settle re-check the
/// generation under the state lock, so a worker superseded mid-fetch can
/// never write into a newer generation's results or clear its loading flag.
fn run_fetch_loop(
    shared: Arc<Shared>,
    source: Arc<dyn DetailSource>,
    candidates: Vec<CatalogEntry>,
    generation: Generation,
) {
    for entry in &candidates {
        if shared.latest.load(Ordering::SeqCst) != generation {
            return;
        }

        match source.fetch(entry) {
            Ok(record) => {
                let mut state = shared.state.lock();
                if shared.latest.load(Ordering::SeqCst) == generation {
                    state.records.push(record);
                    drop(state);
                    (shared.notify)();
                }
            }
            Err(err) => {
                tracing::warn!(entry = %entry.name, error = %err, "detail fetch failed; skipping entry");
            }
        }
    }

    let mut state = shared.state.lock();
    if shared.latest.load(Ordering::SeqCst) == generation {
        state.loading = false;
        drop(state);
        (shared.notify)();
    }
}
