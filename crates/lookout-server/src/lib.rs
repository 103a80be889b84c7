//! `LookOutline` HTTP server.
//!
//! Wires the lead intake core and the SMTP mailer into a running Axum
//! server. Serves the JSON API at `/api/*` and the landing page at `/`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
