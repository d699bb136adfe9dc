//! Blocking HTTP client for the remote creature catalog.
//!
//! Three endpoints: the single-page catalog index, the per-entry detail
//! resource, and the species resource carrying localized names and
//! descriptions. Responses are read to a string and parsed with serde_json;
//! network failure and malformed bodies are not distinguished beyond their
//! error variant. No timeouts are configured: a hung request is abandoned
//! when the next search generation supersedes it.

use crate::catalog::CatalogEntry;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::record::DetailRecord;
use crate::api::wire::{CatalogPage, DetailPayload, SpeciesPayload};
use serde::de::DeserializeOwned;

pub mod wire;

pub struct ApiClient {
    agent: ureq::Agent,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let agent_config = ureq::Agent::config_builder().build();
        Self {
            agent: ureq::Agent::new_with_config(agent_config),
            config,
        }
    }

    /// Fetches the full catalog index in one request.
    pub fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        let url = format!(
            "{}/pokemon?limit={}",
            self.config.base_url, self.config.catalog_page_size
        );
        let page: CatalogPage = self.get_json(&url)?;
        Ok(page.results)
    }

    /// Fetches one entry's detail resource from its catalog url.
    pub fn fetch_detail(&self, url: &str) -> Result<DetailPayload, ApiError> {
        self.get_json(url)
    }

    /// Fetches the species resource keyed by the detail payload's id.
    pub fn fetch_species(&self, id: u32) -> Result<SpeciesPayload, ApiError> {
        let url = format!("{}/pokemon-species/{}", self.config.base_url, id);
        self.get_json(&url)
    }

    /// Runs the per-candidate fetch pair and builds the record.
    ///
    /// The detail resource is fetched first; the species lookup is keyed by
    /// the id it returns, not by the catalog url.
    pub fn detail_record(&self, entry: &CatalogEntry) -> Result<DetailRecord, ApiError> {
        let detail = self.fetch_detail(&entry.url)?;
        let species = self.fetch_species(detail.id)?;
        DetailRecord::from_payloads(
            detail,
            species,
            &self.config.locale,
            &self.config.missing_description,
        )
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let mut response = self.agent.get(url).call()?;
        let body = response.body_mut().read_to_string()?;
        Ok(serde_json::from_str(&body)?)
    }
}
