//! Ninot (figure) domain model.

use serde::{Deserialize, Serialize};

/// A ninot belonging to a falla, subject to voting.
///
/// `nombre_falla` is denormalized so the figure remains displayable offline.
/// `total_votos` is a server-computed aggregate; the client never increments
/// it locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ninot {
    pub id_ninot: i64,
    pub id_falla: i64,
    pub nombre_falla: String,
    pub nombre_ninot: String,
    pub descripcion: Option<String>,
    pub altura_metros: Option<f64>,
    pub ancho_metros: Option<f64>,
    pub premiado: bool,
    pub total_votos: i32,
}
