//! HTTP API layer for Academy CMS.

pub mod handlers;
mod routes;
pub mod types;

pub use routes::build_router;
