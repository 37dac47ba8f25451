//! Repository for festival events.

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

use fallapp_api::{map_evento, ApiClient};
use fallapp_core::models::Evento;
use fallapp_core::{CacheStore, Result};

#[derive(Clone)]
pub struct EventosRepository {
    api: Arc<ApiClient>,
    store: Arc<dyn CacheStore<Evento>>,
}

impl EventosRepository {
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn CacheStore<Evento>>) -> Self {
        EventosRepository { api, store }
    }

    /// Fetch the next `limite` upcoming events and replace the cache.
    pub async fn refresh(&self, limite: i32) -> Result<()> {
        let dtos = self.api.get_proximos_eventos(limite).await?;
        let eventos: Vec<Evento> = dtos.into_iter().map(map_evento).collect();
        debug!("refreshed eventos cache with {} rows", eventos.len());
        self.store.replace_all(eventos).await
    }

    /// Live snapshots of cached events in chronological order.
    pub fn observe_cached(&self) -> watch::Receiver<Vec<Evento>> {
        self.store.observe_all()
    }

    /// Events of one falla. Network one-shot, not cached.
    pub async fn eventos_de_falla(&self, id_falla: i64) -> Result<Vec<Evento>> {
        let dtos = self.api.get_eventos_by_falla(id_falla).await?;
        Ok(dtos.into_iter().map(map_evento).collect())
    }
}
