// Scribe Service Library
//
// A small publishing service: blog-style posts rendered as HTML pages and a
// JSON REST API for notes, both backed by a relational store. A single
// hardcoded admin credential, carried as a signed session cookie, gates post
// creation and deletion.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod session;

pub use config::Config;
pub use error::{AppError, Result};

/// Shared application context, constructed once at startup and injected into
/// every handler via `web::Data`. No ambient global state.
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::AnyPool,
    pub config: Config,
}
