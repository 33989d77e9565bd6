//! Directory-backed file sink for exported documents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::share::FileSink;

/// Writes each document as a file inside one directory.
#[derive(Debug, Clone)]
pub struct DirFileSink {
    dir: PathBuf,
}

impl DirFileSink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Full path a document with this filename is written to.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        // Only the final component is kept so a name cannot escape the directory.
        let name = Path::new(filename)
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("export.json"));
        self.dir.join(name)
    }
}

impl FileSink for DirFileSink {
    fn write(&self, filename: &str, content_type: &str, bytes: &[u8]) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(filename);
        debug!("Writing {} ({} bytes) to {:?}", content_type, bytes.len(), path);
        fs::write(&path, bytes)?;
        info!("Saved {:?}", path);
        Ok(())
    }
}
