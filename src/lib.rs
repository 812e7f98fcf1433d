//! Heartbeat - HTTP liveness service
//!
//! Exposes `GET /api/health`, which answers `{"ok":true,"ts":<epoch-millis>}`
//! for as long as the process can serve HTTP.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::*;
pub use routes::create_router;
