//! Prompt variables for each coaching feature.
//!
//! Each feature renders `preamble.j2` followed by `<feature_code>.j2`. This
//! module decides which variables those templates receive, substituting a
//! fixed default for every field the form left empty.
//!
//! A blank primary goal renders as [`DEFAULT_GOAL`] rather than an empty
//! `Goal:` line, and a blank tactical goal falls back to the primary goal, so
//! no template ever ends up with an empty objective.

use std::collections::BTreeMap;

use crate::domain::{
    AthleteProfile, FeatureCode, FeatureInputs, InjuryInputs, MentalInputs, NutritionInputs,
    TacticalInputs, TrainingInputs,
};

pub const DEFAULT_GOAL: &str = "Overall athletic development";
pub const DEFAULT_TRAINING_DAYS: u8 = 4;
pub const DEFAULT_SESSION_DURATION: u16 = 60;
pub const DEFAULT_INTENSITY: &str = "Moderate";
pub const DEFAULT_EQUIPMENT: &str = "Bodyweight only";
pub const DEFAULT_DRILL_EQUIPMENT: &str = "Basic equipment";
pub const DEFAULT_INJURY_HISTORY: &str = "General recovery";
pub const DEFAULT_INJURY_STATUS: &str = "Maintenance";
pub const DEFAULT_SKILL_FOCUS: &str = "overall game";
pub const DEFAULT_DIET_TYPE: &str = "No Preference";
pub const DEFAULT_ALLERGIES: &str = "None";
pub const DEFAULT_CALORIE_GOAL: &str = "Athletic Performance";
pub const DEFAULT_MEAL_COUNT: u8 = 4;
pub const DEFAULT_EVENT: &str = "upcoming competition";
pub const DEFAULT_DAYS_UNTIL: u8 = 7;
pub const DEFAULT_MENTAL_CHALLENGES: &str = "General preparation";

/// Name of the shared template rendered before every feature body.
pub const PREAMBLE_TEMPLATE: &str = "preamble.j2";

/// Variable values handed to the template engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    pub variables: BTreeMap<String, String>,
}

impl PromptContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.variables.insert(name.into(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }
}

/// Template file holding the body for `feature`.
pub fn body_template_name(feature: FeatureCode) -> String {
    format!("{}.j2", feature.code())
}

/// Build the full variable set for a profile, feature and primary goal.
pub fn prompt_context(
    profile: &AthleteProfile,
    inputs: &FeatureInputs,
    general_goal: &str,
) -> PromptContext {
    let goal = non_blank(Some(general_goal)).unwrap_or(DEFAULT_GOAL);

    let ctx = PromptContext::new()
        .with_var("age", profile.age())
        .with_var("gender", profile.gender())
        .with_var("sport", profile.sport())
        .with_var("position", profile.position())
        .with_var("experience", profile.experience())
        .with_var("goal", goal);

    match inputs {
        FeatureInputs::WorkoutPlan(training)
        | FeatureInputs::WarmupCooldown(training)
        | FeatureInputs::Hydration(training) => with_training(ctx, training, DEFAULT_EQUIPMENT),
        FeatureInputs::PositionDrills(training) => {
            with_training(ctx, training, DEFAULT_DRILL_EQUIPMENT)
        }
        FeatureInputs::InjuryRecovery { injury, training } => {
            with_injury(with_training(ctx, training, DEFAULT_EQUIPMENT), injury)
        }
        FeatureInputs::MobilityWorkout(injury) => with_injury(ctx, injury),
        FeatureInputs::TacticalTips(tactical) => with_tactical(ctx, tactical, goal),
        FeatureInputs::NutritionGuide(nutrition) => with_nutrition(ctx, nutrition),
        FeatureInputs::MentalPrep(mental) => with_mental(ctx, mental),
        FeatureInputs::Visualization => ctx,
    }
}

fn with_training(
    ctx: PromptContext,
    training: &TrainingInputs,
    equipment_default: &str,
) -> PromptContext {
    ctx.with_var("training_days", training.training_days.unwrap_or(DEFAULT_TRAINING_DAYS))
        .with_var(
            "session_duration",
            training.session_duration.unwrap_or(DEFAULT_SESSION_DURATION),
        )
        .with_var(
            "intensity",
            non_blank(training.intensity.as_deref()).unwrap_or(DEFAULT_INTENSITY),
        )
        .with_var("equipment", joined_or(&training.equipment, equipment_default))
}

fn with_injury(ctx: PromptContext, injury: &InjuryInputs) -> PromptContext {
    ctx.with_var(
        "injury_history",
        non_blank(injury.injury_history.as_deref()).unwrap_or(DEFAULT_INJURY_HISTORY),
    )
    .with_var(
        "injury_severity",
        non_blank(injury.injury_severity.as_deref()).unwrap_or(DEFAULT_INJURY_STATUS),
    )
}

fn with_tactical(ctx: PromptContext, tactical: &TacticalInputs, goal: &str) -> PromptContext {
    // An empty tactical goal falls back to the athlete's primary goal.
    ctx.with_var(
        "skill_focus",
        non_blank(tactical.skill_focus.as_deref()).unwrap_or(DEFAULT_SKILL_FOCUS),
    )
    .with_var("tactical_goal", non_blank(tactical.tactical_goal.as_deref()).unwrap_or(goal))
}

fn with_nutrition(ctx: PromptContext, nutrition: &NutritionInputs) -> PromptContext {
    ctx.with_var("meal_count", nutrition.meal_count.unwrap_or(DEFAULT_MEAL_COUNT))
        .with_var(
            "diet_type",
            non_blank(nutrition.diet_type.as_deref()).unwrap_or(DEFAULT_DIET_TYPE),
        )
        .with_var(
            "allergies",
            non_blank(nutrition.allergies.as_deref()).unwrap_or(DEFAULT_ALLERGIES),
        )
        .with_var(
            "calorie_goal",
            non_blank(nutrition.calorie_goal.as_deref()).unwrap_or(DEFAULT_CALORIE_GOAL),
        )
}

fn with_mental(ctx: PromptContext, mental: &MentalInputs) -> PromptContext {
    ctx.with_var("event_type", non_blank(mental.event_type.as_deref()).unwrap_or(DEFAULT_EVENT))
        .with_var("days_until", mental.days_until.unwrap_or(DEFAULT_DAYS_UNTIL))
        .with_var(
            "mental_challenges",
            joined_or(&mental.mental_challenges, DEFAULT_MENTAL_CHALLENGES),
        )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn joined_or(items: &[String], default: &str) -> String {
    if items.is_empty() { default.to_string() } else { items.join(", ") }
}
