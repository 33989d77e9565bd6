use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::PlayerStatRecord;
use crate::storage::StorageConfig;

#[derive(Clone)]
pub struct AppState {
    /// Records loaded at startup; read-only while serving
    pub players: Arc<Vec<PlayerStatRecord>>,
    pub storage: Arc<StorageConfig>,
    pub config: Arc<AppConfig>,
}
