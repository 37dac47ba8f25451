//! Voto domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Vote category. Wire values are the backend's award names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoVoto {
    Monumento,
    IngenioYGracia,
    Experimental,
}

impl TipoVoto {
    /// Tolerant parse; unknown values map to `Monumento`, as the original
    /// client does.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "INGENIO_Y_GRACIA" => Self::IngenioYGracia,
            "EXPERIMENTAL" => Self::Experimental,
            _ => Self::Monumento,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monumento => "MONUMENTO",
            Self::IngenioYGracia => "INGENIO_Y_GRACIA",
            Self::Experimental => "EXPERIMENTAL",
        }
    }
}

/// A vote cast by a user for a falla (via one of its ninots).
///
/// The client holds no authoritative copy of votes; any list of them is a
/// point-in-time snapshot fetched from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voto {
    pub id_voto: i64,
    pub id_usuario: i64,
    pub nombre_usuario: String,
    pub id_falla: i64,
    pub nombre_falla: String,
    pub tipo_voto: TipoVoto,
    pub fecha_creacion: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipo_voto_round_trips_known_values() {
        for tipo in [TipoVoto::Monumento, TipoVoto::IngenioYGracia, TipoVoto::Experimental] {
            assert_eq!(TipoVoto::parse(tipo.as_str()), tipo);
        }
    }

    #[test]
    fn tipo_voto_defaults_unknown_to_monumento() {
        assert_eq!(TipoVoto::parse("FAVORITO"), TipoVoto::Monumento);
    }
}
