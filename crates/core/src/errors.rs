//! Error types shared across the client stack.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by repositories and the layers beneath them.
///
/// Every repository operation resolves to one of these; nothing below the
/// repository boundary is allowed to escape as a panic or an untyped fault.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or connection failure (timeout, refused, unparsable non-2xx body).
    #[error("transport error: {0}")]
    Transport(String),

    /// Well-formed envelope with `exito=false`; carries the server message.
    #[error("server reported: {0}")]
    ServerReported(String),

    /// Malformed response body on a required field.
    #[error("decode error: {0}")]
    Decode(String),

    /// An authenticated call was attempted with no token in the session.
    #[error("no active session")]
    Unauthenticated,

    /// Caller-supplied input rejected before any request went out. The
    /// message is user-facing.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Local cache read/write failure. Fatal to the operation, not the process.
    #[error("local storage error: {0}")]
    LocalStorage(String),
}

impl Error {
    /// Create a transport error from any displayable cause.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport(cause.to_string())
    }

    /// Create a decode error from any displayable cause.
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::Decode(cause.to_string())
    }

    /// Server-reported failure, falling back to a generic message when the
    /// envelope carried none.
    pub fn server_reported(mensaje: Option<String>) -> Self {
        Self::ServerReported(mensaje.unwrap_or_else(|| "Error desconocido en la API".to_string()))
    }

    /// The message a UI layer should show for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::ServerReported(msg) | Self::InvalidInput(msg) => msg.clone(),
            Self::Unauthenticated => "No hay sesión activa. Inicia sesión de nuevo.".to_string(),
            _ => "Error de conexión. Inténtalo más tarde.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_reported_falls_back_to_generic_message() {
        let err = Error::server_reported(None);
        assert!(matches!(err, Error::ServerReported(_)));
        assert_eq!(err.user_message(), "Error desconocido en la API");
    }

    #[test]
    fn server_message_is_surfaced_verbatim() {
        let err = Error::server_reported(Some("db down".to_string()));
        assert_eq!(err.user_message(), "db down");
    }
}
