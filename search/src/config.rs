use critterdex_core::SearchSettings;

/// Configuration for search behavior.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Normalized queries shorter than this settle immediately with no results.
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_query_len: 2 }
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            min_query_len: settings.min_query_len,
        }
    }
}
