use critterdex_core::CatalogEntry;

/// Normalized query text with its matching rule, chosen by input shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Normalized text shorter than the minimum; settles with no results.
    TooShort,
    /// All-digit query: exact string match against the embedded reference id.
    ById(String),
    /// Substring match against the entry name.
    ByName(String),
}

impl SearchQuery {
    /// Trims and lowercases the raw text, then picks the rule.
    pub fn parse(text: &str, min_len: usize) -> Self {
        let normalized = text.trim().to_lowercase();
        if normalized.chars().count() < min_len {
            Self::TooShort
        } else if normalized.bytes().all(|b| b.is_ascii_digit()) {
            Self::ById(normalized)
        } else {
            Self::ByName(normalized)
        }
    }

    /// Whether the entry is a candidate for this query.
    ///
    /// Id matching is string equality, so leading zeros never match. Name
    /// matching is case-insensitive substring containment.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            Self::TooShort => false,
            Self::ById(id) => entry.reference_id() == Some(id.as_str()),
            Self::ByName(needle) => entry.name.to_lowercase().contains(needle.as_str()),
        }
    }
}
