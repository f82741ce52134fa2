//! One generation cycle: compile, call the remote service, present.

use chrono::Utc;

use crate::app::AppContext;
use crate::app::commands::present::{self, PresentedPlan};
use crate::domain::{AppError, AthleteProfile, FeatureInputs, GenerationRequest, SessionContext};
use crate::ports::{ArtifactStore, GenerationClient};
use crate::services::prompt_compiler;

/// Everything the form collected for one coaching plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachingRequest {
    pub profile: AthleteProfile,
    pub inputs: FeatureInputs,
    pub goal: String,
}

/// Run one request end to end.
///
/// Fails with [`AppError::Configuration`] before compiling anything when the
/// session has no credential. On any failure nothing is added to history.
pub fn execute<G: GenerationClient, A: ArtifactStore>(
    ctx: &AppContext<G, A>,
    session: &mut SessionContext,
    request: &CoachingRequest,
) -> Result<PresentedPlan, AppError> {
    session.configuration().api_key()?;

    let prompt = prompt_compiler::compile(&request.profile, &request.inputs, &request.goal)?;
    let generation = GenerationRequest {
        model: ctx.model().to_string(),
        prompt,
        config: ctx.generation(),
    };

    let text = ctx.client().generate(&generation)?;
    Ok(present::execute(ctx.artifacts(), session, request, text, Utc::now()))
}
