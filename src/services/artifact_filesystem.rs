use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::domain::{AppError, PlanArtifact};
use crate::ports::ArtifactStore;

/// Filesystem-based artifact store writing plain-text plans into one directory.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Create an artifact store for the given output directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn save(&self, artifact: &PlanArtifact) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(&artifact.file_name);
        // Names have second precision; never replace an earlier plan.
        let mut file = OpenOptions::new().write(true).create_new(true).open(&path).map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                AppError::Io(std::io::Error::new(
                    ErrorKind::AlreadyExists,
                    format!("{} already exists", path.display()),
                ))
            } else {
                AppError::Io(e)
            }
        })?;
        file.write_all(artifact.content.as_bytes())?;
        Ok(path)
    }
}
