//! Sales Service
//!
//! Serves a fixed set of sales records behind presence-checked query
//! parameters, with interactive OpenAPI documentation at `/api-docs`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod routes;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
