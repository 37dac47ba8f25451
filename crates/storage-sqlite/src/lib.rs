//! SQLite persistence for the offline cache.
//!
//! One table per cached entity, written exclusively through a single-writer
//! actor and observed as whole ordered snapshots.

pub mod db;
pub mod errors;
pub mod eventos;
pub mod fallas;
pub mod ninots;
pub mod schema;
pub mod usuarios;

pub use db::{create_pool, get_connection, init, run_migrations, spawn_writer, WriteHandle};
pub use errors::StorageError;
pub use eventos::EventoStore;
pub use fallas::FallaStore;
pub use ninots::NinotStore;
pub use usuarios::UsuarioStore;
