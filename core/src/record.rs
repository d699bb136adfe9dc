//! Detail record construction from the per-candidate fetch pair.

use crate::api::wire::{DetailPayload, SpeciesPayload};
use crate::error::ApiError;

/// Fully resolved detail card for one catalog entry.
///
/// Built from the detail and species payloads of a single candidate and
/// immutable afterwards. Height and weight arrive from the API in tenths
/// and are stored here in meters and kilograms.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRecord {
    pub id: u32,
    /// Localized if available for the configured locale, else canonical.
    pub display_name: String,
    pub artwork_url: String,
    /// Declared type names, comma-and-space joined in declaration order.
    pub type_list: String,
    pub height_m: f64,
    pub weight_kg: f64,
    pub description: String,
}

impl DetailRecord {
    /// Builds a record from the two payloads of one candidate.
    ///
    /// `locale` selects localized name and description variants; a missing
    /// name falls back to the canonical one, a missing description to
    /// `missing_description`. A detail payload without official artwork is
    /// an error, so the coordinator skips that candidate.
    pub fn from_payloads(
        detail: DetailPayload,
        species: SpeciesPayload,
        locale: &str,
        missing_description: &str,
    ) -> Result<Self, ApiError> {
        let artwork_url = detail
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default)
            .ok_or(ApiError::MissingField(
                "sprites.other.official-artwork.front_default",
            ))?;

        let display_name = species
            .names
            .iter()
            .find(|entry| entry.language.name == locale)
            .map(|entry| entry.name.clone())
            .unwrap_or(detail.name);

        let description = species
            .flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == locale)
            .map(|entry| flatten_flavor_text(&entry.flavor_text))
            .unwrap_or_else(|| missing_description.to_string());

        let type_list = detail
            .types
            .iter()
            .map(|slot| slot.kind.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Self {
            id: detail.id,
            display_name,
            artwork_url,
            type_list,
            height_m: f64::from(detail.height) / 10.0,
            weight_kg: f64::from(detail.weight) / 10.0,
            description,
        })
    }
}

/// Replaces each embedded line break or form feed with a single space.
fn flatten_flavor_text(raw: &str) -> String {
    raw.chars()
        .map(|c| if c == '\n' || c == '\x0c' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests;
