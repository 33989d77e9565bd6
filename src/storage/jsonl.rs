//! JSONL (JSON Lines) storage.
//!
//! Player records and form series are supplied as JSONL files.
//! Each line is a valid JSON object representing one entity.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{StorageConfig, StorageError};
use crate::models::{FormPoint, PlayerId, PlayerStatRecord};

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities from the file. Malformed lines are skipped.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        index + 1,
                        self.path,
                        e
                    );
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

/// Read every supplied player record.
pub fn read_players(config: &StorageConfig) -> Result<Vec<PlayerStatRecord>, StorageError> {
    let reader = JsonlReader::new(config.players_path());
    if !reader.exists() {
        return Err(StorageError::PathNotFound(config.players_path()));
    }
    reader.read_all()
}

/// Read a player's recent-form series. Missing series read as empty.
pub fn read_recent_form(
    config: &StorageConfig,
    id: PlayerId,
) -> Result<Vec<FormPoint>, StorageError> {
    JsonlReader::new(config.form_path(id)).read_all()
}

/// Pick players by id, in the order the ids are given.
pub fn select_players(
    records: &[PlayerStatRecord],
    ids: &[PlayerId],
) -> Result<Vec<PlayerStatRecord>, StorageError> {
    ids.iter()
        .map(|id| {
            records
                .iter()
                .find(|p| p.id == *id)
                .cloned()
                .ok_or(StorageError::PlayerNotFound(*id))
        })
        .collect()
}
