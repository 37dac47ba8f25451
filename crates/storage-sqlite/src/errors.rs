//! Storage-local error type.
//!
//! Diesel and pool errors are foreign types, so they fold into this local
//! enum first and from there into [`fallapp_core::Error::LocalStorage`].
//! Domain errors raised inside a write job pass through unchanged.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("connection pool error: {0}")]
    Connection(#[from] r2d2::Error),

    #[error("database connection error: {0}")]
    Connect(#[from] diesel::result::ConnectionError),

    #[error("query error: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("migration error: {0}")]
    Migration(String),

    #[error(transparent)]
    Domain(#[from] fallapp_core::Error),
}

impl From<StorageError> for fallapp_core::Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Domain(inner) => inner,
            other => fallapp_core::Error::LocalStorage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_folds_into_local_storage() {
        let err: fallapp_core::Error = StorageError::Query(diesel::result::Error::NotFound).into();
        assert!(matches!(err, fallapp_core::Error::LocalStorage(_)));
    }

    #[test]
    fn domain_error_passes_through() {
        let err: fallapp_core::Error =
            StorageError::Domain(fallapp_core::Error::Unauthenticated).into();
        assert!(matches!(err, fallapp_core::Error::Unauthenticated));
    }
}
