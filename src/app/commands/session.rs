//! The interactive coaching loop.
//!
//! The loop has two states: awaiting a trigger and a generation in flight.
//! A failed generation is shown and the loop goes back to waiting; only
//! collector and output failures end the session early.

use std::io::Write;

use crate::app::AppContext;
use crate::app::commands::generate::{self, CoachingRequest};
use crate::app::commands::history;
use crate::app::commands::present::PresentedPlan;
use crate::domain::{AppError, AthleteProfile, SessionContext};
use crate::ports::{ArtifactStore, Collector, GenerationClient, NextAction};

pub const DISCLAIMER: &str = "⚠️  Always consult with a qualified coach or healthcare provider \
                              before starting any new training program.";

/// Run the session until the athlete quits.
pub fn run<G, A, C>(
    ctx: &AppContext<G, A>,
    session: &mut SessionContext,
    collector: &mut C,
    out: &mut impl Write,
) -> Result<(), AppError>
where
    G: GenerationClient,
    A: ArtifactStore,
    C: Collector,
{
    let profile = collector.collect_profile()?;
    let mut request = collect_request(collector, profile)?;

    loop {
        writeln!(out, "⏳ Generating {}...", request.inputs.feature().label())?;
        let succeeded = match generate::execute(ctx, session, &request) {
            Ok(plan) => {
                show_plan(&plan, out)?;
                true
            }
            Err(err @ AppError::GenerationFailed(_)) => {
                writeln!(out, "❌ {}", err)?;
                writeln!(out, "Please check your API key configuration and try again.")?;
                false
            }
            Err(err) => return Err(err),
        };

        loop {
            match collector.next_action(succeeded)? {
                NextAction::Helpful => writeln!(out, "✅ Thank you for your feedback!")?,
                NextAction::NotHelpful => writeln!(out, "We'll work on improving!")?,
                NextAction::ViewHistory => history::render(session.history(), out)?,
                NextAction::GenerateAgain => break,
                NextAction::NewPlan => {
                    request = collect_request(collector, request.profile.clone())?;
                    break;
                }
                NextAction::ChangeProfile => {
                    let profile = collector.collect_profile()?;
                    request = collect_request(collector, profile)?;
                    break;
                }
                NextAction::Quit => {
                    writeln!(out, "{}", DISCLAIMER)?;
                    return Ok(());
                }
            }
        }
    }
}

fn collect_request<C: Collector>(
    collector: &mut C,
    profile: AthleteProfile,
) -> Result<CoachingRequest, AppError> {
    let feature = collector.collect_feature()?;
    let inputs = collector.collect_feature_inputs(feature)?;
    let goal = collector.collect_goal()?;
    Ok(CoachingRequest { profile, inputs, goal })
}

fn show_plan(plan: &PresentedPlan, out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "✅ Your personalized coaching plan is ready!")?;
    writeln!(out)?;
    writeln!(out, "{}", plan.result.generated_text.trim_end())?;
    writeln!(out)?;
    match &plan.saved {
        Ok(path) => writeln!(out, "📥 Saved coaching plan to {}", path.display())?,
        Err(err) => writeln!(out, "⚠️  Could not save {}: {}", plan.artifact_name, err)?,
    }
    Ok(())
}
