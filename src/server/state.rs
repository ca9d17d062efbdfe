//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's
//! state extraction. Both fields are cheap to clone: the connection is a pool and
//! the token service shares its keys behind an `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::service::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQL store.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens with the configured secret.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
