//! Falla (festival association) domain model.

use serde::{Deserialize, Serialize};

/// Competition category of a falla.
///
/// The backend sends free-text category names; anything unrecognized maps to
/// `SinCategoria` rather than failing the whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Categoria {
    Especial,
    Primera,
    Segunda,
    Tercera,
    Infantil,
    SinCategoria,
}

impl Categoria {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "ESPECIAL" => Self::Especial,
            "PRIMERA" | "PRIMERA_A" | "PRIMERA_B" => Self::Primera,
            "SEGUNDA" | "SEGUNDA_A" | "SEGUNDA_B" => Self::Segunda,
            "TERCERA" | "TERCERA_A" | "TERCERA_B" | "CUARTA" | "QUINTA" => Self::Tercera,
            "INFANTIL" | "INFANTIL_ESPECIAL" | "INFANTIL_PRIMERA" => Self::Infantil,
            _ => Self::SinCategoria,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Especial => "ESPECIAL",
            Self::Primera => "PRIMERA",
            Self::Segunda => "SEGUNDA",
            Self::Tercera => "TERCERA",
            Self::Infantil => "INFANTIL",
            Self::SinCategoria => "SIN_CATEGORIA",
        }
    }
}

/// A falla as browsed by the client. Identity is the server-assigned
/// `id_falla`; rows are immutable once fetched except by whole replacement
/// on the next refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Falla {
    pub id_falla: i64,
    pub nombre: String,
    pub seccion: String,
    pub presidente: Option<String>,
    pub lema: Option<String>,
    pub categoria: Categoria,
    pub url_boceto: Option<String>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
}

/// One row of the vote-stats ranking. A point-in-time view, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallaRanking {
    pub id_falla: i64,
    pub nombre: String,
    pub seccion: Option<String>,
    pub votos: i64,
}
