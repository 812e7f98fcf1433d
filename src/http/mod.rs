//! HTTP server module.
//!
//! Startup is split into two steps so each state is visible to callers:
//! - **bind**: claim the listening socket (a failure here is fatal for the process)
//! - **serve**: accept connections on the bound socket until the process exits

mod server;

pub use server::{bind, serve, start_server, ServerError};
