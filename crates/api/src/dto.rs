//! Wire DTOs mirroring the backend's JSON field names.
//!
//! Field names here match the API exactly (Spanish, mostly camelCase with a
//! few snake_case exceptions the backend pins via `@JsonProperty`). Unknown
//! fields are ignored; optional fields default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallaDto {
    pub id_falla: i64,
    pub nombre: String,
    pub seccion: String,
    #[serde(default)]
    pub presidente: Option<String>,
    #[serde(default)]
    pub lema: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub url_boceto: Option<String>,
    #[serde(default)]
    pub latitud: Option<f64>,
    #[serde(default)]
    pub longitud: Option<f64>,
}

/// Evento row. The backend pins `id_evento`, `id_falla`, and `fecha_evento`
/// to snake_case.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventoDto {
    #[serde(rename = "id_evento")]
    pub id_evento: i64,
    #[serde(rename = "id_falla")]
    pub id_falla: i64,
    #[serde(default)]
    pub nombre_falla: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(rename = "fecha_evento")]
    pub fecha_evento: String,
    #[serde(default)]
    pub ubicacion: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NinotDto {
    pub id_ninot: i64,
    pub id_falla: i64,
    #[serde(default)]
    pub nombre_falla: String,
    #[serde(default)]
    pub nombre_ninot: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub altura_metros: Option<f64>,
    #[serde(default)]
    pub ancho_metros: Option<f64>,
    #[serde(default)]
    pub premiado: bool,
    #[serde(default)]
    pub total_votos: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotoDto {
    pub id_voto: i64,
    pub id_usuario: i64,
    #[serde(default)]
    pub nombre_usuario: String,
    pub id_falla: i64,
    #[serde(default)]
    pub nombre_falla: String,
    pub tipo_voto: String,
    pub fecha_creacion: String,
}

/// Body of POST /api/votos. The server resolves the falla from the ninot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VotoRequestDto {
    pub id_ninot: i64,
    pub tipo_voto: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDto {
    pub email: String,
    pub contrasena: String,
}

/// Body of POST /api/auth/registro.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestDto {
    pub email: String,
    pub contrasena: String,
    pub nombre_completo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_falla: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioDto {
    pub id_usuario: i64,
    pub email: String,
    pub nombre_completo: String,
    pub rol: String,
    #[serde(default)]
    pub verificado: bool,
    #[serde(default)]
    pub id_falla: Option<i64>,
    #[serde(default)]
    pub nombre_falla: Option<String>,
}

/// Payload of a successful login or registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub token: String,
    #[serde(default = "default_token_tipo")]
    pub tipo: String,
    #[serde(default)]
    pub expira_en: i64,
    pub usuario: UsuarioDto,
}

fn default_token_tipo() -> String {
    "Bearer".to_string()
}

/// Body of POST /api/comentarios. The backend runs sentiment analysis on
/// `contenido` server-side; the client only submits it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComentarioRequestDto {
    pub id_usuario: i64,
    pub id_falla: i64,
    pub contenido: String,
}

/// Body of PUT /api/usuarios/{id}.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerfilRequestDto {
    pub nombre_completo: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallaRankingDto {
    pub id_falla: i64,
    pub nombre: String,
    #[serde(default)]
    pub seccion: Option<String>,
    #[serde(default)]
    pub votos: i64,
}

/// Payload of GET /api/estadisticas/votos.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstadisticasVotosDto {
    #[serde(default)]
    pub total_votos: i64,
    #[serde(default)]
    pub top_fallas: Vec<FallaRankingDto>,
    #[serde(default)]
    pub filtro_tipo_voto: Option<String>,
}
