//! Shared application state.

/// Cloned into every stateful router; both fields are cheap to clone
/// (the connection is a handle to the pool, not a connection).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
