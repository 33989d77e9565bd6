//! Filesystem access for the binary and the HTTP boundary.
//!
//! Handles:
//! - Reading supplied player records (JSONL)
//! - Reading supplied recent-form series
//! - Writing exported comparison documents

mod jsonl;
mod sink;

pub use jsonl::*;
pub use sink::*;

use std::path::PathBuf;
use thiserror::Error;

use crate::models::PlayerId;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// One player record per line.
    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join("players.jsonl")
    }

    pub fn form_dir(&self) -> PathBuf {
        self.data_dir.join("form")
    }

    /// Recent-form series of one player, one match per line.
    pub fn form_path(&self, id: PlayerId) -> PathBuf {
        self.form_dir().join(format!("{}.jsonl", id))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
