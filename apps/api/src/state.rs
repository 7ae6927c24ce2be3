use crate::config::Config;
use database::postgres::DatabaseConnection;

/// Shared application state passed to request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
