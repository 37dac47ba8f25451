pub mod model;
pub mod store;

pub use store::FallaStore;
