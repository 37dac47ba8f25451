//! Domain models for the FallApp client.

mod eventos;
mod fallas;
mod ninots;
mod usuarios;
mod votos;

pub use eventos::*;
pub use fallas::*;
pub use ninots::*;
pub use usuarios::*;
pub use votos::*;
