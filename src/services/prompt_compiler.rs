//! Prompt compilation from embedded templates.
//!
//! Templates live in `src/assets/prompts` and are compiled into the binary.
//! Rendering is strict: a template referencing a variable the feature does not
//! provide is an error rather than an empty substitution.

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};

use crate::domain::prompt::{PREAMBLE_TEMPLATE, body_template_name, prompt_context};
use crate::domain::{
    AppError, AthleteProfile, FeatureCode, FeatureInputs, FieldMap, PromptContext,
};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");
static ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();

/// Compile the prompt for a typed feature selection.
///
/// Deterministic: identical arguments always produce identical text.
pub fn compile(
    profile: &AthleteProfile,
    inputs: &FeatureInputs,
    general_goal: &str,
) -> Result<String, AppError> {
    let context = prompt_context(profile, inputs, general_goal);
    let preamble = render(PREAMBLE_TEMPLATE, &context)?;
    let body = render(&body_template_name(inputs.feature()), &context)?;

    Ok(format!("{}\n\n{}", preamble.trim_end(), body.trim_end()))
}

/// Compile from a raw feature code and raw form values.
///
/// Fails with [`AppError::UnknownFeature`] when `feature_code` is not in the catalog.
pub fn compile_code(
    profile: &AthleteProfile,
    feature_code: &str,
    fields: &FieldMap,
    general_goal: &str,
) -> Result<String, AppError> {
    let feature = FeatureCode::parse(feature_code)?;
    let inputs = FeatureInputs::from_fields(feature, fields)?;
    compile(profile, &inputs, general_goal)
}

fn environment() -> Result<&'static Environment<'static>, AppError> {
    ENV.get_or_init(build_environment).as_ref().map_err(|reason| AppError::PromptRender {
        template: PROMPTS_DIR.path().display().to_string(),
        reason: reason.clone(),
    })
}

fn build_environment() -> Result<Environment<'static>, String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    for file in PROMPTS_DIR.files() {
        let name = file
            .path()
            .to_str()
            .ok_or_else(|| format!("template path '{}' is not UTF-8", file.path().display()))?;
        let source = file
            .contents_utf8()
            .ok_or_else(|| format!("template '{}' is not valid UTF-8", name))?;
        env.add_template(name, source)
            .map_err(|e| format!("failed to register '{}': {}", name, e))?;
    }
    Ok(env)
}

fn render(template_name: &str, context: &PromptContext) -> Result<String, AppError> {
    let template = environment()?.get_template(template_name).map_err(|e| {
        AppError::PromptRender { template: template_name.to_string(), reason: e.to_string() }
    })?;
    template.render(&context.variables).map_err(|e| AppError::PromptRender {
        template: template_name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExperienceLevel, Gender, Sport, TrainingInputs};
    use proptest::prelude::*;

    fn midfielder() -> AthleteProfile {
        AthleteProfile::new(
            Sport::Football,
            15,
            Gender::Male,
            "Midfielder",
            ExperienceLevel::Intermediate,
        )
        .unwrap()
    }

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn every_feature_compiles_with_all_inputs_omitted() {
        for feature in FeatureCode::ALL {
            let prompt = compile(&midfielder(), &FeatureInputs::empty(feature), "").unwrap();
            assert!(prompt.starts_with("You are CoachBot AI"), "{}", feature);
            assert!(prompt.contains("Provide:\n1. "), "{}", feature);
            assert!(!prompt.contains("{{"), "{}", feature);
        }
    }

    #[test]
    fn omitted_inputs_render_documented_defaults() {
        let expectations: [(FeatureCode, &[&str]); 10] = [
            (
                FeatureCode::WorkoutPlan,
                &[
                    "4-day per week",
                    "approximately 60 minutes",
                    "Intensity level: Moderate",
                    "Available equipment: Bodyweight only",
                ],
            ),
            (
                FeatureCode::InjuryRecovery,
                &[
                    "Injury History: General recovery",
                    "Current Status: Maintenance",
                    "4 days/week, 60 min sessions",
                    "Equipment: Bodyweight only",
                ],
            ),
            (
                FeatureCode::TacticalTips,
                &["Skill Focus: overall game", "Tactical Goal: Overall athletic development"],
            ),
            (
                FeatureCode::NutritionGuide,
                &[
                    "Create a 4-meal per day",
                    "Diet Type: No Preference",
                    "Allergies/Restrictions: None",
                    "Goal: Athletic Performance",
                ],
            ),
            (
                FeatureCode::WarmupCooldown,
                &["Session type: Moderate intensity training", "Duration: 60 minutes session"],
            ),
            (
                FeatureCode::MentalPrep,
                &[
                    "Event: upcoming competition",
                    "Days until event: 7",
                    "Challenges: General preparation",
                ],
            ),
            (
                FeatureCode::Hydration,
                &[
                    "Training schedule: 4 days/week",
                    "Session duration: 60 minutes",
                    "Intensity: Moderate",
                ],
            ),
            (FeatureCode::Visualization, &["Position: Midfielder", "for a 15-year-old athlete"]),
            (
                FeatureCode::PositionDrills,
                &[
                    "Training days: 4/week",
                    "Session length: 60 minutes",
                    "Equipment: Basic equipment",
                ],
            ),
            (
                FeatureCode::MobilityWorkout,
                &["Injury history: General recovery", "Current status: Maintenance"],
            ),
        ];

        for (feature, needles) in expectations {
            let prompt = compile(&midfielder(), &FeatureInputs::empty(feature), "").unwrap();
            for needle in needles {
                assert!(prompt.contains(needle), "{} missing '{}':\n{}", feature, needle, prompt);
            }
            assert!(prompt.contains("Overall athletic development"), "{}", feature);
        }
    }

    #[test]
    fn preamble_describes_athlete() {
        let prompt = compile(&midfielder(), &FeatureInputs::Visualization, "win").unwrap();
        assert!(prompt.starts_with(
            "You are CoachBot AI, an expert sports coach specializing in youth athlete development.\n\
             You are working with a 15-year-old Male Football/Soccer player who plays as a Midfielder.\n\
             Experience level: Intermediate (1-3 years)\n\n\
             Create pre-match visualization techniques for:\n"
        ));
        assert!(prompt.ends_with("Make it practical for a 15-year-old athlete."));
    }

    #[test]
    fn warmup_scenario_mentions_sport_position_duration_and_intensity() {
        let inputs = FeatureInputs::WarmupCooldown(TrainingInputs {
            intensity: Some("Moderate".to_string()),
            session_duration: Some(60),
            ..TrainingInputs::default()
        });

        let prompt = compile(&midfielder(), &inputs, "build stamina").unwrap();

        let needles = ["Football/Soccer", "Midfielder", "60 minutes session", "Moderate intensity"];
        for needle in needles {
            assert!(prompt.contains(needle), "missing '{}'", needle);
        }
        assert!(prompt.contains("Make it specific to Football/Soccer and Midfielder."));
    }

    #[test]
    fn provided_fields_are_substituted() {
        let prompt = compile_code(
            &midfielder(),
            "workout_plan",
            &fields(&[
                ("training_days", "3"),
                ("session_duration", "90"),
                ("intensity", "High"),
                ("equipment", "Gym,Track"),
            ]),
            "build stamina for full match",
        )
        .unwrap();

        assert!(prompt.contains("Generate a comprehensive 3-day per week workout plan."));
        assert!(prompt.contains("approximately 90 minutes"));
        assert!(prompt.contains("Intensity level: High"));
        assert!(prompt.contains("Available equipment: Gym, Track"));
        assert!(prompt.contains("Goal: build stamina for full match"));
    }

    #[test]
    fn unknown_feature_code_fails() {
        let err = compile_code(&midfielder(), "sleep_hygiene", &FieldMap::new(), "").unwrap_err();
        assert!(matches!(err, AppError::UnknownFeature(code) if code == "sleep_hygiene"));
    }

    #[test]
    fn every_feature_has_a_template() {
        for feature in FeatureCode::ALL {
            assert!(PROMPTS_DIR.get_file(body_template_name(feature)).is_some(), "{}", feature);
        }
        assert!(PROMPTS_DIR.get_file(PREAMBLE_TEMPLATE).is_some());
    }

    proptest! {
        #[test]
        fn compile_is_deterministic(
            feature_index in 0usize..10,
            age in 10u8..=25,
            goal in "[a-zA-Z ]{0,40}",
            days in 1u8..=7,
        ) {
            let profile = AthleteProfile::new(
                Sport::Hockey,
                age,
                Gender::Female,
                "Attacker",
                ExperienceLevel::Beginner,
            )
            .unwrap();
            let feature = FeatureCode::ALL[feature_index];
            let inputs = FeatureInputs::from_fields(
                feature,
                &fields(&[("training_days", days.to_string().as_str())]),
            )
            .unwrap();

            let first = compile(&profile, &inputs, &goal).unwrap();
            let second = compile(&profile, &inputs.clone(), &goal.clone()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
