//! Repository for the falla listing: network refresh into the cache plus
//! cache-side views.

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

use fallapp_api::{map_falla, ApiClient};
use fallapp_core::models::{Categoria, Falla};
use fallapp_core::{CacheStore, Result};

const PAGE_SIZE: i32 = 100;

#[derive(Clone)]
pub struct FallasRepository {
    api: Arc<ApiClient>,
    store: Arc<dyn CacheStore<Falla>>,
}

impl FallasRepository {
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn CacheStore<Falla>>) -> Self {
        FallasRepository { api, store }
    }

    /// Fetch the full listing and replace the cache in one transaction.
    ///
    /// On any error the cache keeps its previous rows and the error is
    /// returned to the caller.
    pub async fn refresh(&self) -> Result<()> {
        let mut all = Vec::new();
        let mut pagina = 0;
        loop {
            let batch = self.api.get_fallas(pagina, PAGE_SIZE).await?;
            let done = (batch.len() as i32) < PAGE_SIZE;
            all.extend(batch.into_iter().map(map_falla));
            if done {
                break;
            }
            pagina += 1;
        }
        debug!("refreshed fallas cache with {} rows", all.len());
        self.store.replace_all(all).await
    }

    /// Live snapshots of the cached listing, ordered by name.
    pub fn observe_cached(&self) -> watch::Receiver<Vec<Falla>> {
        self.store.observe_all()
    }

    /// Free-text search. A network one-shot; results are a transient view
    /// and are never merged into the cache.
    pub async fn search(&self, texto: &str) -> Result<Vec<Falla>> {
        let dtos = self.api.buscar_fallas(texto).await?;
        Ok(dtos.into_iter().map(map_falla).collect())
    }

    /// Cache-side filter by competition category.
    pub fn fallas_por_categoria(&self, categoria: Categoria) -> Vec<Falla> {
        self.store
            .observe_all()
            .borrow()
            .iter()
            .filter(|f| f.categoria == categoria)
            .cloned()
            .collect()
    }
}
