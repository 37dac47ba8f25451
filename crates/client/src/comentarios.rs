//! Repository for comments on fallas. A one-shot authenticated write; the
//! client never caches comments (the backend enriches them server-side
//! before they are ever read back).

use std::sync::Arc;

use fallapp_api::{ApiClient, ComentarioRequestDto};
use fallapp_core::models::Usuario;
use fallapp_core::{CacheStore, Error, Result, SessionContext};

const MIN_CONTENIDO_CHARS: usize = 3;
const MAX_CONTENIDO_CHARS: usize = 500;

#[derive(Clone)]
pub struct ComentariosRepository {
    api: Arc<ApiClient>,
    session: Arc<SessionContext>,
    usuarios: Arc<dyn CacheStore<Usuario>>,
}

impl ComentariosRepository {
    pub fn new(
        api: Arc<ApiClient>,
        session: Arc<SessionContext>,
        usuarios: Arc<dyn CacheStore<Usuario>>,
    ) -> Self {
        ComentariosRepository {
            api,
            session,
            usuarios,
        }
    }

    /// Post a comment on a falla as the signed-in user.
    ///
    /// Content is trimmed and must be 3 to 500 characters; anything outside
    /// that range is rejected locally, before token check or network.
    pub async fn comentar(&self, id_falla: i64, contenido: &str) -> Result<()> {
        let trimmed = contenido.trim();
        let chars = trimmed.chars().count();
        if !(MIN_CONTENIDO_CHARS..=MAX_CONTENIDO_CHARS).contains(&chars) {
            return Err(Error::InvalidInput(
                "El comentario debe tener entre 3 y 500 caracteres".to_string(),
            ));
        }

        let token = self.session.require_token()?;
        let id_usuario = self
            .usuarios
            .observe_all()
            .borrow()
            .first()
            .map(|u| u.id_usuario)
            .ok_or(Error::Unauthenticated)?;

        let req = ComentarioRequestDto {
            id_usuario,
            id_falla,
            contenido: trimmed.to_string(),
        };
        self.api.crear_comentario(&token, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::watch;

    use fallapp_core::models::Rol;

    struct FixedUsuarios {
        tx: watch::Sender<Vec<Usuario>>,
    }

    impl FixedUsuarios {
        fn with(rows: Vec<Usuario>) -> Arc<Self> {
            let (tx, _rx) = watch::channel(rows);
            Arc::new(FixedUsuarios { tx })
        }
    }

    #[async_trait]
    impl CacheStore<Usuario> for FixedUsuarios {
        async fn replace_all(&self, rows: Vec<Usuario>) -> Result<()> {
            self.tx.send_replace(rows);
            Ok(())
        }

        fn observe_all(&self) -> watch::Receiver<Vec<Usuario>> {
            self.tx.subscribe()
        }

        async fn clear(&self) -> Result<()> {
            self.tx.send_replace(Vec::new());
            Ok(())
        }
    }

    fn usuario() -> Usuario {
        Usuario {
            id_usuario: 9,
            email: "demo@example.com".to_string(),
            nombre_completo: "Demo".to_string(),
            rol: Rol::Fallero,
            verificado: true,
            id_falla: None,
            nombre_falla: None,
        }
    }

    fn repo(session: Arc<SessionContext>, usuarios: Vec<Usuario>) -> ComentariosRepository {
        // Nothing listens here; every rejection must happen before a request.
        let api = Arc::new(ApiClient::new("http://127.0.0.1:9"));
        ComentariosRepository::new(api, session, FixedUsuarios::with(usuarios))
    }

    #[tokio::test]
    async fn content_outside_bounds_is_rejected_locally() {
        let session = Arc::new(SessionContext::new());
        session.set_token("tok");
        let repo = repo(session, vec![usuario()]);

        assert!(matches!(
            repo.comentar(7, "ab").await,
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            repo.comentar(7, "  ab  ").await,
            Err(Error::InvalidInput(_))
        ));
        let too_long = "x".repeat(501);
        assert!(matches!(
            repo.comentar(7, &too_long).await,
            Err(Error::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn comment_without_session_fails_fast() {
        let repo = repo(Arc::new(SessionContext::new()), vec![usuario()]);
        assert!(matches!(
            repo.comentar(7, "Molt bonica").await,
            Err(Error::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn comment_without_cached_user_fails_fast() {
        let session = Arc::new(SessionContext::new());
        session.set_token("tok");
        let repo = repo(session, Vec::new());
        assert!(matches!(
            repo.comentar(7, "Molt bonica").await,
            Err(Error::Unauthenticated)
        ));
    }
}
