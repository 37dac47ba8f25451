//! Response envelope and pagination wrappers used by the FallApp backend.

use fallapp_core::{Error, Result};
use serde::Deserialize;

/// Uniform wrapper around every backend response:
///
/// ```json
/// {
///   "exito": true,
///   "mensaje": "Operación exitosa",
///   "datos": { ... },
///   "timestamp": "2026-02-01T18:30:00"
/// }
/// ```
///
/// Unknown fields are ignored; `mensaje`, `datos`, and `timestamp` may be
/// absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub exito: bool,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub datos: Option<T>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope: `exito=false` becomes
    /// [`Error::ServerReported`] with the server's message; a success
    /// envelope with no payload is a decode failure.
    pub fn into_datos(self) -> Result<T> {
        if !self.exito {
            return Err(Error::server_reported(self.mensaje));
        }
        self.datos
            .ok_or_else(|| Error::decode("respuesta sin datos"))
    }

    /// Like [`Envelope::into_datos`] but for endpoints whose success payload
    /// is irrelevant or absent (vote create/delete).
    pub fn into_unit(self) -> Result<()> {
        if !self.exito {
            return Err(Error::server_reported(self.mensaje));
        }
        Ok(())
    }
}

/// Pagination wrapper used by `/api/fallas` (backend's own field names).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub contenido: Vec<T>,
    #[serde(default)]
    pub pagina_actual: i32,
    #[serde(default)]
    pub total_elementos: i64,
    #[serde(default)]
    pub total_paginas: i32,
    #[serde(default)]
    pub es_ultima_pagina: bool,
}

/// Spring-Data style page (`content`, `totalElements`, ...) used by the
/// eventos and ninots listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: i64,
    #[serde(default)]
    pub total_pages: i32,
    #[serde(default)]
    pub last: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_envelope_surfaces_server_message() {
        let json = r#"{"exito":false,"mensaje":"db down","datos":null,"timestamp":"2026-02-01T18:30:00"}"#;
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(json).unwrap();
        match envelope.into_datos() {
            Err(Error::ServerReported(msg)) => assert_eq!(msg, "db down"),
            other => panic!("expected ServerReported, got {:?}", other),
        }
    }

    #[test]
    fn failure_envelope_without_message_uses_fallback() {
        let json = r#"{"exito":false}"#;
        let envelope: Envelope<i32> = serde_json::from_str(json).unwrap();
        assert!(matches!(envelope.into_datos(), Err(Error::ServerReported(_))));
    }

    #[test]
    fn success_envelope_with_unknown_fields_decodes() {
        let json = r#"{"exito":true,"mensaje":null,"datos":[1,2],"timestamp":"x","extra":"ignored"}"#;
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_datos().unwrap(), vec![1, 2]);
    }

    #[test]
    fn paginated_response_defaults_missing_fields() {
        let json = r#"{"contenido":[{"a":1}]}"#;
        let page: PaginatedResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(page.contenido.len(), 1);
        assert_eq!(page.total_elementos, 0);
    }
}
