//! REST API client for the FallApp backend.
//!
//! One method per endpoint, typed parameters, and a uniform envelope
//! (`{exito, mensaje, datos}`) around every response. No retries happen at
//! this layer; retry policy, if any, belongs to the caller.

mod client;
mod dto;
mod envelope;
mod mapper;

pub use client::ApiClient;
pub use dto::*;
pub use envelope::{Envelope, PageResponse, PaginatedResponse};
pub use mapper::{
    map_evento, map_falla, map_ninot, map_ranking, map_usuario, map_voto, parse_fecha,
};
