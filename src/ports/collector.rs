use crate::domain::{AppError, AthleteProfile, FeatureCode, FeatureInputs};

/// What to do after a generation attempt finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Acknowledge positive feedback and ask again.
    Helpful,
    /// Acknowledge negative feedback and ask again.
    NotHelpful,
    /// Re-run the same request.
    GenerateAgain,
    /// Keep the profile, pick a new feature.
    NewPlan,
    /// Re-enter the whole form.
    ChangeProfile,
    /// Show the session history and ask again.
    ViewHistory,
    Quit,
}

/// Port for gathering form input from the athlete.
pub trait Collector {
    /// Gather sport, age, gender, position and experience.
    fn collect_profile(&mut self) -> Result<AthleteProfile, AppError>;

    /// Pick one of the coaching features.
    fn collect_feature(&mut self) -> Result<FeatureCode, AppError>;

    /// Gather the fields `feature` uses. Skipped fields stay empty.
    fn collect_feature_inputs(&mut self, feature: FeatureCode) -> Result<FeatureInputs, AppError>;

    /// Gather the free-text primary goal.
    fn collect_goal(&mut self) -> Result<String, AppError>;

    /// Ask what to do next. `succeeded` reports whether the last attempt produced a plan.
    fn next_action(&mut self, succeeded: bool) -> Result<NextAction, AppError>;
}
