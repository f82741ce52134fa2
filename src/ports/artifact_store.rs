use std::path::PathBuf;

use crate::domain::{AppError, PlanArtifact};

/// Port for saving downloadable plan files.
pub trait ArtifactStore {
    /// Persist the artifact and return where it was written.
    fn save(&self, artifact: &PlanArtifact) -> Result<PathBuf, AppError>;
}
