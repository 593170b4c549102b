//! Application state management.

/// Shared application state.
///
/// Cloned per handler (cheap Arc clones), giving access to configuration and
/// the PostgreSQL connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
