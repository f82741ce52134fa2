use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, PlanArtifact};
use crate::ports::ArtifactStore;

/// In-memory artifact store for testing.
#[derive(Clone, Default)]
pub struct MemoryArtifactStore {
    pub saved: Arc<Mutex<Vec<PlanArtifact>>>,
    pub fail_with: Option<String>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { fail_with: Some(message.into()), ..Self::default() }
    }

    pub fn saved_artifacts(&self) -> Vec<PlanArtifact> {
        self.saved.lock().unwrap().clone()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn save(&self, artifact: &PlanArtifact) -> Result<PathBuf, AppError> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::Io(std::io::Error::other(message.clone())));
        }
        self.saved.lock().unwrap().push(artifact.clone());
        Ok(PathBuf::from("memory").join(&artifact.file_name))
    }
}
