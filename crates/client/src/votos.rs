//! Repository for votes and the vote-stats ranking. Every operation is
//! authenticated and fails fast with `Unauthenticated` when no session
//! token is held, before any request goes out.

use std::sync::Arc;

use fallapp_api::{map_ranking, map_voto, ApiClient, VotoRequestDto};
use fallapp_core::models::{FallaRanking, TipoVoto, Voto};
use fallapp_core::{Result, SessionContext};

#[derive(Clone)]
pub struct VotosRepository {
    api: Arc<ApiClient>,
    session: Arc<SessionContext>,
}

impl VotosRepository {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionContext>) -> Self {
        VotosRepository { api, session }
    }

    /// Cast a vote for a ninot.
    pub async fn votar(&self, id_ninot: i64, tipo: TipoVoto) -> Result<()> {
        let token = self.session.require_token()?;
        let req = VotoRequestDto {
            id_ninot,
            tipo_voto: tipo.as_str().to_string(),
        };
        self.api.crear_voto(&token, req).await
    }

    /// Withdraw a previously cast vote.
    pub async fn retirar_voto(&self, id_voto: i64) -> Result<()> {
        let token = self.session.require_token()?;
        self.api.eliminar_voto(&token, id_voto).await
    }

    /// The acting user's votes. Point-in-time view, never cached.
    pub async fn mis_votos(&self) -> Result<Vec<Voto>> {
        let token = self.session.require_token()?;
        let dtos = self.api.get_mis_votos(&token).await?;
        Ok(dtos.into_iter().map(map_voto).collect())
    }

    /// Votes received by one falla.
    pub async fn votos_de_falla(&self, id_falla: i64) -> Result<Vec<Voto>> {
        let token = self.session.require_token()?;
        let dtos = self.api.get_votos_falla(&token, id_falla).await?;
        Ok(dtos.into_iter().map(map_voto).collect())
    }

    /// Falla ranking by received votes, optionally restricted to one vote
    /// type. Public endpoint, no token needed.
    pub async fn ranking(&self, limite: i32, tipo: Option<TipoVoto>) -> Result<Vec<FallaRanking>> {
        let stats = self
            .api
            .get_estadisticas_votos(limite, tipo.map(|t| t.as_str()))
            .await?;
        Ok(stats.top_fallas.into_iter().map(map_ranking).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fallapp_core::Error;

    fn repo_without_session() -> VotosRepository {
        // Nothing listens here; token gating must fail before any request.
        let api = Arc::new(ApiClient::new("http://127.0.0.1:9"));
        VotosRepository::new(api, Arc::new(SessionContext::new()))
    }

    #[tokio::test]
    async fn authenticated_calls_fail_fast_without_token() {
        let repo = repo_without_session();
        assert!(matches!(
            repo.votar(1, TipoVoto::Monumento).await,
            Err(Error::Unauthenticated)
        ));
        assert!(matches!(repo.mis_votos().await, Err(Error::Unauthenticated)));
        assert!(matches!(
            repo.retirar_voto(5).await,
            Err(Error::Unauthenticated)
        ));
        assert!(matches!(
            repo.votos_de_falla(7).await,
            Err(Error::Unauthenticated)
        ));
    }
}
