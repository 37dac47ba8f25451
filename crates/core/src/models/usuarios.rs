//! Usuario and session domain models.

use serde::{Deserialize, Serialize};

/// Roles a user can hold in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rol {
    /// System administrator.
    Admin,
    /// Manages one falla.
    Casal,
    /// Regular member.
    Fallero,
}

impl Rol {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Self::Admin,
            "CASAL" => Self::Casal,
            _ => Self::Fallero,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Casal => "CASAL",
            Self::Fallero => "FALLERO",
        }
    }
}

/// The authenticated user's identity as cached opportunistically after login
/// or a profile fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id_usuario: i64,
    pub email: String,
    pub nombre_completo: String,
    pub rol: Rol,
    pub verificado: bool,
    pub id_falla: Option<i64>,
    pub nombre_falla: Option<String>,
}

/// Result of a successful login. The token is the only piece of session
/// state that outlives this value; it is never refreshed in place.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    pub token: String,
    pub tipo: String,
    pub expira_en: i64,
    pub usuario: Usuario,
}
