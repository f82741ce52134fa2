//! Presenting a generated plan: download artifact plus history entry.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::app::commands::generate::CoachingRequest;
use crate::domain::{AppError, CoachingResult, PlanArtifact, SessionContext};
use crate::ports::ArtifactStore;

/// Outcome of presenting one generated plan.
#[derive(Debug)]
pub struct PresentedPlan {
    pub result: CoachingResult,
    pub artifact_name: String,
    /// Where the artifact was written, or why it could not be.
    pub saved: Result<PathBuf, AppError>,
}

/// Record the result in history and offer it as a plain-text artifact.
///
/// The history entry is appended even if writing the artifact fails; the
/// generated text is already in hand at that point.
pub fn execute<A: ArtifactStore>(
    artifacts: &A,
    session: &mut SessionContext,
    request: &CoachingRequest,
    generated_text: String,
    generated_at: DateTime<Utc>,
) -> PresentedPlan {
    let feature = request.inputs.feature();
    let artifact = PlanArtifact::new(feature, generated_at, &generated_text);
    let result = CoachingResult {
        timestamp: generated_at,
        feature,
        sport: request.profile.sport(),
        position: request.profile.position().to_string(),
        generated_text,
    };

    session.history_mut().append(result.clone());
    let saved = artifacts.save(&artifact);

    PresentedPlan { result, artifact_name: artifact.file_name, saved }
}
