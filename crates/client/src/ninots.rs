//! Repository for ninots (the satirical figures up for the public vote).

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

use fallapp_api::{map_ninot, ApiClient};
use fallapp_core::models::Ninot;
use fallapp_core::{CacheStore, Result};

#[derive(Clone)]
pub struct NinotsRepository {
    api: Arc<ApiClient>,
    store: Arc<dyn CacheStore<Ninot>>,
}

impl NinotsRepository {
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn CacheStore<Ninot>>) -> Self {
        NinotsRepository { api, store }
    }

    /// Fetch one page of the ninot listing and replace the cache.
    pub async fn refresh(&self, pagina: i32, tamano: i32) -> Result<()> {
        let dtos = self.api.get_ninots(pagina, tamano).await?;
        let ninots: Vec<Ninot> = dtos.into_iter().map(map_ninot).collect();
        debug!("refreshed ninots cache with {} rows", ninots.len());
        self.store.replace_all(ninots).await
    }

    /// Live snapshots, awarded ninots first, then by vote count descending.
    pub fn observe_cached(&self) -> watch::Receiver<Vec<Ninot>> {
        self.store.observe_all()
    }

    /// Ninots of one falla. Network one-shot, not cached.
    pub async fn ninots_de_falla(&self, id_falla: i64) -> Result<Vec<Ninot>> {
        let dtos = self.api.get_ninots_by_falla(id_falla).await?;
        Ok(dtos.into_iter().map(map_ninot).collect())
    }
}
