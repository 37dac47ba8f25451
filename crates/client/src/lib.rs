//! Repositories and composition root for the FallApp client stack.
//!
//! Reads come from the local cache as observable snapshots; refreshes pull
//! from the network and replace whole tables. A failed refresh leaves the
//! cache exactly as it was.

mod auth;
mod client;
mod comentarios;
mod config;
mod eventos;
mod fallas;
mod ninots;
mod votos;

pub use auth::AuthRepository;
pub use client::FallappClient;
pub use comentarios::ComentariosRepository;
pub use config::ClientConfig;
pub use eventos::EventosRepository;
pub use fallas::FallasRepository;
pub use ninots::NinotsRepository;
pub use votos::VotosRepository;
