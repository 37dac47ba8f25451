//! Evento domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An event organized by a falla. Read-only from the client's perspective.
///
/// `fecha_evento` comes from a textual field on the wire; when the backend
/// sends something unparsable the mapper substitutes the current time (a
/// documented quirk of the source data, logged as a warning, not a
/// guarantee).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evento {
    pub id_evento: i64,
    pub id_falla: i64,
    pub nombre_falla: String,
    pub tipo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub fecha_evento: NaiveDateTime,
    pub ubicacion: Option<String>,
}
