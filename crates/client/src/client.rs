//! Composition root. Everything is wired here by explicit parameter
//! passing; no service locator, no globals.

use std::sync::Arc;

use log::info;

use fallapp_api::ApiClient;
use fallapp_core::{Result, SessionContext};
use fallapp_storage_sqlite::{
    create_pool, init, run_migrations, spawn_writer, EventoStore, FallaStore, NinotStore,
    UsuarioStore,
};

use crate::auth::AuthRepository;
use crate::comentarios::ComentariosRepository;
use crate::config::ClientConfig;
use crate::eventos::EventosRepository;
use crate::fallas::FallasRepository;
use crate::ninots::NinotsRepository;
use crate::votos::VotosRepository;

/// The whole client stack: one database, one HTTP client, one session, and
/// the repositories over them.
pub struct FallappClient {
    session: Arc<SessionContext>,
    fallas_store: Arc<FallaStore>,
    eventos_store: Arc<EventoStore>,
    ninots_store: Arc<NinotStore>,
    usuarios_store: Arc<UsuarioStore>,
    pub fallas: FallasRepository,
    pub eventos: EventosRepository,
    pub ninots: NinotsRepository,
    pub votos: VotosRepository,
    pub comentarios: ComentariosRepository,
    pub auth: AuthRepository,
}

impl FallappClient {
    /// Open (or create) the local database, run migrations, and wire the
    /// repositories.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let db_path = init(&config.data_dir)?;
        run_migrations(&db_path)?;
        let pool = create_pool(&db_path)?;
        let writer = spawn_writer(pool.as_ref().clone());
        info!("opened local cache at {}", db_path);

        let api = Arc::new(ApiClient::new(&config.base_url));
        let session = Arc::new(SessionContext::new());

        let fallas_store = Arc::new(FallaStore::new(Arc::clone(&pool), writer.clone())?);
        let eventos_store = Arc::new(EventoStore::new(Arc::clone(&pool), writer.clone())?);
        let ninots_store = Arc::new(NinotStore::new(Arc::clone(&pool), writer.clone())?);
        let usuarios_store = Arc::new(UsuarioStore::new(Arc::clone(&pool), writer)?);

        let fallas = FallasRepository::new(Arc::clone(&api), fallas_store.clone());
        let eventos = EventosRepository::new(Arc::clone(&api), eventos_store.clone());
        let ninots = NinotsRepository::new(Arc::clone(&api), ninots_store.clone());
        let votos = VotosRepository::new(Arc::clone(&api), Arc::clone(&session));
        let comentarios = ComentariosRepository::new(
            Arc::clone(&api),
            Arc::clone(&session),
            usuarios_store.clone(),
        );
        let auth = AuthRepository::new(api, Arc::clone(&session), usuarios_store.clone());

        Ok(FallappClient {
            session,
            fallas_store,
            eventos_store,
            ninots_store,
            usuarios_store,
            fallas,
            eventos,
            ninots,
            votos,
            comentarios,
            auth,
        })
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Sign out: drop the token and wipe every cache table.
    pub async fn sign_out(&self) -> Result<()> {
        use fallapp_core::CacheStore;

        self.session.clear_token();
        futures::try_join!(
            self.fallas_store.clear(),
            self.eventos_store.clear(),
            self.ninots_store.clear(),
            self.usuarios_store.clear(),
        )?;
        info!("signed out, caches cleared");
        Ok(())
    }
}
