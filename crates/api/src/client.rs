//! HTTP client for the FallApp REST backend.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

use fallapp_core::{Error, Result};

use crate::dto::*;
use crate::envelope::{Envelope, PageResponse, PaginatedResponse};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_LOG_BODY_CHARS: usize = 512;

/// Client for the FallApp REST API.
///
/// One method per endpoint. Authenticated endpoints take the bearer token
/// explicitly; token gating lives in the repositories, which refuse to call
/// these methods without a session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the backend (e.g., "http://localhost:8080")
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn log_response(status: reqwest::StatusCode, body: &str) {
        if status.is_success() {
            debug!("API response status: {}", status);
            return;
        }

        let mut preview = body.chars().take(MAX_LOG_BODY_CHARS).collect::<String>();
        if body.chars().count() > MAX_LOG_BODY_CHARS {
            preview.push_str("...");
        }
        debug!("API error response ({}): {}", status, preview);
    }

    /// Build headers for an authenticated request.
    fn auth_headers(&self, token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::Decode("invalid access token format".to_string()))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Parse a response body into the uniform envelope.
    ///
    /// The backend wraps failures in the envelope too (with a non-2xx
    /// status), so the body is parsed first; only an unparsable non-2xx body
    /// degrades to a transport error.
    async fn parse_envelope<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>> {
        let status = response.status();
        let body = response.text().await.map_err(Error::transport)?;
        Self::log_response(status, &body);

        match serde_json::from_str::<Envelope<T>>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(e) if status.is_success() => Err(Error::decode(e)),
            Err(_) => Err(Error::Transport(format!("HTTP {}", status))),
        }
    }

    async fn get_envelope<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<Envelope<T>> {
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.headers(self.auth_headers(token)?);
        }
        let response = request.send().await.map_err(Error::transport)?;
        Self::parse_envelope(response).await
    }

    // Auth ------------------------------------------------------------------

    /// Authenticate and obtain a bearer token.
    ///
    /// POST /api/auth/login
    pub async fn login(&self, email: &str, contrasena: &str) -> Result<LoginResponseDto> {
        let url = format!("{}/api/auth/login", self.base_url);
        let body = LoginRequestDto {
            email: email.to_string(),
            contrasena: contrasena.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(Error::transport)?;

        Self::parse_envelope(response).await?.into_datos()
    }

    /// Register a new account.
    ///
    /// POST /api/auth/registro
    pub async fn register(&self, req: RegisterRequestDto) -> Result<LoginResponseDto> {
        let url = format!("{}/api/auth/registro", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .map_err(Error::transport)?;

        Self::parse_envelope(response).await?.into_datos()
    }

    // Fallas ----------------------------------------------------------------

    /// One page of the falla listing.
    ///
    /// GET /api/fallas?pagina=&tamano=
    pub async fn get_fallas(&self, pagina: i32, tamano: i32) -> Result<Vec<FallaDto>> {
        let url = format!("{}/api/fallas", self.base_url);
        let query = [
            ("pagina", pagina.to_string()),
            ("tamano", tamano.to_string()),
        ];

        let page: PaginatedResponse<FallaDto> =
            self.get_envelope(url, &query, None).await?.into_datos()?;
        Ok(page.contenido)
    }

    /// Free-text falla search.
    ///
    /// GET /api/fallas/buscar?q=
    pub async fn buscar_fallas(&self, texto: &str) -> Result<Vec<FallaDto>> {
        let url = format!("{}/api/fallas/buscar", self.base_url);
        let query = [("q", texto.to_string())];

        self.get_envelope(url, &query, None).await?.into_datos()
    }

    // Eventos ---------------------------------------------------------------

    /// The next `limite` upcoming events.
    ///
    /// GET /api/eventos/proximos?limite=
    pub async fn get_proximos_eventos(&self, limite: i32) -> Result<Vec<EventoDto>> {
        let url = format!("{}/api/eventos/proximos", self.base_url);
        let query = [("limite", limite.to_string())];

        self.get_envelope(url, &query, None).await?.into_datos()
    }

    /// Events of one falla (Spring page payload).
    ///
    /// GET /api/eventos/falla/{id}
    pub async fn get_eventos_by_falla(&self, id_falla: i64) -> Result<Vec<EventoDto>> {
        let url = format!("{}/api/eventos/falla/{}", self.base_url, id_falla);

        let page: PageResponse<EventoDto> =
            self.get_envelope(url, &[], None).await?.into_datos()?;
        Ok(page.content)
    }

    // Ninots ----------------------------------------------------------------

    /// One page of the ninot listing.
    ///
    /// GET /api/ninots?pagina=&tamano=
    pub async fn get_ninots(&self, pagina: i32, tamano: i32) -> Result<Vec<NinotDto>> {
        let url = format!("{}/api/ninots", self.base_url);
        let query = [
            ("pagina", pagina.to_string()),
            ("tamano", tamano.to_string()),
        ];

        let page: PageResponse<NinotDto> =
            self.get_envelope(url, &query, None).await?.into_datos()?;
        Ok(page.content)
    }

    /// Ninots of one falla.
    ///
    /// GET /api/ninots/falla/{id}
    pub async fn get_ninots_by_falla(&self, id_falla: i64) -> Result<Vec<NinotDto>> {
        let url = format!("{}/api/ninots/falla/{}", self.base_url, id_falla);

        let page: PageResponse<NinotDto> =
            self.get_envelope(url, &[], None).await?.into_datos()?;
        Ok(page.content)
    }

    // Usuarios ----------------------------------------------------------------

    /// The profile of a user.
    ///
    /// GET /api/usuarios/{id}
    pub async fn get_perfil(&self, token: &str, id_usuario: i64) -> Result<UsuarioDto> {
        let url = format!("{}/api/usuarios/{}", self.base_url, id_usuario);

        self.get_envelope(url, &[], Some(token)).await?.into_datos()
    }

    /// Update a user's profile.
    ///
    /// PUT /api/usuarios/{id}
    pub async fn update_perfil(
        &self,
        token: &str,
        id_usuario: i64,
        req: UpdatePerfilRequestDto,
    ) -> Result<UsuarioDto> {
        let url = format!("{}/api/usuarios/{}", self.base_url, id_usuario);

        let response = self
            .client
            .put(&url)
            .headers(self.auth_headers(token)?)
            .json(&req)
            .send()
            .await
            .map_err(Error::transport)?;

        Self::parse_envelope(response).await?.into_datos()
    }

    // Votos -----------------------------------------------------------------

    /// Cast a vote for a ninot. The success payload varies between backend
    /// versions, so only the envelope flag is inspected.
    ///
    /// POST /api/votos
    pub async fn crear_voto(&self, token: &str, req: VotoRequestDto) -> Result<()> {
        let url = format!("{}/api/votos", self.base_url);

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers(token)?)
            .json(&req)
            .send()
            .await
            .map_err(Error::transport)?;

        Self::parse_envelope::<serde_json::Value>(response)
            .await?
            .into_unit()
    }

    /// Withdraw a vote.
    ///
    /// DELETE /api/votos/{id}
    pub async fn eliminar_voto(&self, token: &str, id_voto: i64) -> Result<()> {
        let url = format!("{}/api/votos/{}", self.base_url, id_voto);

        let response = self
            .client
            .delete(&url)
            .headers(self.auth_headers(token)?)
            .send()
            .await
            .map_err(Error::transport)?;

        Self::parse_envelope::<serde_json::Value>(response)
            .await?
            .into_unit()
    }

    /// The acting user's votes.
    ///
    /// GET /api/votos/mis-votos
    pub async fn get_mis_votos(&self, token: &str) -> Result<Vec<VotoDto>> {
        let url = format!("{}/api/votos/mis-votos", self.base_url);

        self.get_envelope(url, &[], Some(token)).await?.into_datos()
    }

    /// Votes received by one falla.
    ///
    /// GET /api/votos/falla/{id}
    pub async fn get_votos_falla(&self, token: &str, id_falla: i64) -> Result<Vec<VotoDto>> {
        let url = format!("{}/api/votos/falla/{}", self.base_url, id_falla);

        self.get_envelope(url, &[], Some(token)).await?.into_datos()
    }

    // Comentarios -------------------------------------------------------------

    /// Post a comment on a falla. Success payload is ignored (the backend
    /// returns the analyzed comment, which the client does not keep).
    ///
    /// POST /api/comentarios
    pub async fn crear_comentario(&self, token: &str, req: ComentarioRequestDto) -> Result<()> {
        let url = format!("{}/api/comentarios", self.base_url);

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers(token)?)
            .json(&req)
            .send()
            .await
            .map_err(Error::transport)?;

        Self::parse_envelope::<serde_json::Value>(response)
            .await?
            .into_unit()
    }

    // Estadísticas ------------------------------------------------------------

    /// Falla ranking by received votes, optionally filtered by vote type.
    ///
    /// GET /api/estadisticas/votos?limite=&tipoVoto=
    pub async fn get_estadisticas_votos(
        &self,
        limite: i32,
        tipo_voto: Option<&str>,
    ) -> Result<EstadisticasVotosDto> {
        let url = format!("{}/api/estadisticas/votos", self.base_url);
        let mut query: Vec<(&str, String)> = vec![("limite", limite.to_string())];
        if let Some(tipo) = tipo_voto {
            query.push(("tipoVoto", tipo.to_string()));
        }

        self.get_envelope(url, &query, None).await?.into_datos()
    }
}
