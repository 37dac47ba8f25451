//! Domain models and shared contracts for the FallApp client stack.
//!
//! This crate holds everything the API client, the local cache, and the
//! repositories agree on: the domain types, the error taxonomy, the session
//! context carrying the bearer token, and the cache capability trait.

pub mod cache;
pub mod errors;
pub mod models;
pub mod session;

pub use cache::CacheStore;
pub use errors::{Error, Result};
pub use session::SessionContext;
