//! Authentication and profile repository.
//!
//! Login is the only place a token enters the session, and it overwrites
//! whatever was there. The signed-in user's row is cached opportunistically
//! so the profile survives offline restarts.

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

use fallapp_api::{map_usuario, ApiClient, RegisterRequestDto, UpdatePerfilRequestDto};
use fallapp_core::models::{AuthToken, Usuario};
use fallapp_core::{CacheStore, Error, Result, SessionContext};

#[derive(Clone)]
pub struct AuthRepository {
    api: Arc<ApiClient>,
    session: Arc<SessionContext>,
    store: Arc<dyn CacheStore<Usuario>>,
}

impl AuthRepository {
    pub fn new(
        api: Arc<ApiClient>,
        session: Arc<SessionContext>,
        store: Arc<dyn CacheStore<Usuario>>,
    ) -> Self {
        AuthRepository {
            api,
            session,
            store,
        }
    }

    /// Authenticate, store the bearer token, and cache the user row.
    pub async fn login(&self, email: &str, contrasena: &str) -> Result<AuthToken> {
        let response = self.api.login(email, contrasena).await?;
        self.session.set_token(response.token.clone());

        let usuario = map_usuario(response.usuario);
        self.store.replace_all(vec![usuario.clone()]).await?;
        info!("session opened for usuario {}", usuario.id_usuario);

        Ok(AuthToken {
            token: response.token,
            tipo: response.tipo,
            expira_en: response.expira_en,
            usuario,
        })
    }

    /// Create an account. The backend logs the new user in, so this behaves
    /// like [`AuthRepository::login`] on success.
    pub async fn register(
        &self,
        email: &str,
        contrasena: &str,
        nombre_completo: &str,
        id_falla: Option<i64>,
    ) -> Result<AuthToken> {
        let req = RegisterRequestDto {
            email: email.to_string(),
            contrasena: contrasena.to_string(),
            nombre_completo: nombre_completo.to_string(),
            id_falla,
        };
        let response = self.api.register(req).await?;
        self.session.set_token(response.token.clone());

        let usuario = map_usuario(response.usuario);
        self.store.replace_all(vec![usuario.clone()]).await?;

        Ok(AuthToken {
            token: response.token,
            tipo: response.tipo,
            expira_en: response.expira_en,
            usuario,
        })
    }

    /// Fetch the signed-in user's profile and write it through the cache.
    pub async fn perfil(&self) -> Result<Usuario> {
        let token = self.session.require_token()?;
        let id_usuario = self.cached_usuario_id().ok_or(Error::Unauthenticated)?;

        let dto = self.api.get_perfil(&token, id_usuario).await?;
        let usuario = map_usuario(dto);
        self.store.replace_all(vec![usuario.clone()]).await?;
        Ok(usuario)
    }

    /// Update the profile and write the server's view through the cache.
    pub async fn actualizar_perfil(&self, nombre_completo: &str) -> Result<Usuario> {
        let token = self.session.require_token()?;
        let id_usuario = self.cached_usuario_id().ok_or(Error::Unauthenticated)?;

        let req = UpdatePerfilRequestDto {
            nombre_completo: nombre_completo.to_string(),
        };
        let dto = self.api.update_perfil(&token, id_usuario, req).await?;
        let usuario = map_usuario(dto);
        self.store.replace_all(vec![usuario.clone()]).await?;
        Ok(usuario)
    }

    /// Live snapshots of the cached user row (empty when signed out).
    pub fn observe_usuario(&self) -> watch::Receiver<Vec<Usuario>> {
        self.store.observe_all()
    }

    /// Drop the token. Cache wiping is the composition root's job.
    pub fn logout(&self) {
        self.session.clear_token();
        info!("session closed");
    }

    fn cached_usuario_id(&self) -> Option<i64> {
        self.store
            .observe_all()
            .borrow()
            .first()
            .map(|u| u.id_usuario)
    }
}
