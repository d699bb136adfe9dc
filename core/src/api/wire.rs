//! Serde shapes for the remote API's JSON bodies.
//!
//! Only the fields the client reads are modeled. Fields the API may omit are
//! `Option`; extraction decides between fallback and per-candidate failure.

use crate::catalog::CatalogEntry;
use serde::Deserialize;

/// `GET {base}/pokemon?limit={n}`
#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<CatalogEntry>,
}

/// `GET {entry.url}`
#[derive(Debug, Deserialize)]
pub struct DetailPayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    pub height: u32,
    pub weight: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// `GET {base}/pokemon-species/{id}`
#[derive(Debug, Deserialize)]
pub struct SpeciesPayload {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}
