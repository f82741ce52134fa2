//! Coaching feature catalog and the per-feature input fields.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::AppError;

/// Raw form values keyed by [`Field::key`]. Multi-choice values are comma separated.
pub type FieldMap = BTreeMap<String, String>;

/// The ten coaching features offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureCode {
    WorkoutPlan,
    InjuryRecovery,
    TacticalTips,
    NutritionGuide,
    WarmupCooldown,
    MentalPrep,
    Hydration,
    Visualization,
    PositionDrills,
    MobilityWorkout,
}

impl FeatureCode {
    /// All features in catalog order.
    pub const ALL: [FeatureCode; 10] = [
        FeatureCode::WorkoutPlan,
        FeatureCode::InjuryRecovery,
        FeatureCode::TacticalTips,
        FeatureCode::NutritionGuide,
        FeatureCode::WarmupCooldown,
        FeatureCode::MentalPrep,
        FeatureCode::Hydration,
        FeatureCode::Visualization,
        FeatureCode::PositionDrills,
        FeatureCode::MobilityWorkout,
    ];

    /// Stable identifier used for templates and artifact names.
    pub fn code(&self) -> &'static str {
        match self {
            FeatureCode::WorkoutPlan => "workout_plan",
            FeatureCode::InjuryRecovery => "injury_recovery",
            FeatureCode::TacticalTips => "tactical_tips",
            FeatureCode::NutritionGuide => "nutrition_guide",
            FeatureCode::WarmupCooldown => "warmup_cooldown",
            FeatureCode::MentalPrep => "mental_prep",
            FeatureCode::Hydration => "hydration",
            FeatureCode::Visualization => "visualization",
            FeatureCode::PositionDrills => "position_drills",
            FeatureCode::MobilityWorkout => "mobility_workout",
        }
    }

    /// Menu label shown in the feature picker and stored in history.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureCode::WorkoutPlan => "Position-Based Workout Plan",
            FeatureCode::InjuryRecovery => "Injury Recovery Training",
            FeatureCode::TacticalTips => "Tactical Coaching Tips",
            FeatureCode::NutritionGuide => "Nutrition Guide",
            FeatureCode::WarmupCooldown => "Warm-up & Cool-down Routine",
            FeatureCode::MentalPrep => "Mental Focus & Tournament Prep",
            FeatureCode::Hydration => "Hydration & Electrolyte Strategy",
            FeatureCode::Visualization => "Pre-Match Visualization",
            FeatureCode::PositionDrills => "Position-Specific Drills",
            FeatureCode::MobilityWorkout => "Post-Injury Mobility Workout",
        }
    }

    /// Parse a feature from its code.
    pub fn parse(code: &str) -> Result<FeatureCode, AppError> {
        let normalized = code.trim().to_lowercase().replace('-', "_");
        FeatureCode::ALL
            .into_iter()
            .find(|feature| feature.code() == normalized)
            .ok_or_else(|| AppError::UnknownFeature(code.to_string()))
    }

    /// Fields the feature's template references, in form order.
    pub fn fields(&self) -> &'static [Field] {
        use Field::*;
        match self {
            FeatureCode::WorkoutPlan | FeatureCode::PositionDrills | FeatureCode::Hydration => {
                &[TrainingDays, SessionDuration, Intensity, Equipment]
            }
            FeatureCode::InjuryRecovery => &[
                InjuryHistory,
                InjurySeverity,
                TrainingDays,
                SessionDuration,
                Intensity,
                Equipment,
            ],
            FeatureCode::TacticalTips => &[SkillFocus, TacticalGoal],
            FeatureCode::NutritionGuide => &[DietType, Allergies, CalorieGoal, MealCount],
            FeatureCode::WarmupCooldown => &[Intensity, SessionDuration],
            FeatureCode::MentalPrep => &[EventType, DaysUntil, MentalChallenges],
            FeatureCode::Visualization => &[],
            FeatureCode::MobilityWorkout => &[InjuryHistory, InjurySeverity],
        }
    }
}

impl fmt::Display for FeatureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub const INTENSITY_OPTIONS: [&str; 4] = ["Low", "Moderate", "High", "Very High"];
pub const EQUIPMENT_OPTIONS: [&str; 8] = [
    "Gym",
    "Resistance Bands",
    "Dumbbells",
    "Bodyweight Only",
    "Pool",
    "Track",
    "Sports Field",
    "Home Setup",
];
pub const INJURY_STATUS_OPTIONS: [&str; 5] =
    ["Fully Recovered", "Mild Discomfort", "Moderate Pain", "Recovering", "Recent Injury"];
pub const DIET_OPTIONS: [&str; 5] =
    ["Vegetarian", "Non-Vegetarian", "Vegan", "Pescatarian", "No Preference"];
pub const CALORIE_GOAL_OPTIONS: [&str; 4] =
    ["Weight Loss", "Maintenance", "Muscle Gain", "Athletic Performance"];
pub const EVENT_OPTIONS: [&str; 6] = [
    "School Tournament",
    "Regional Competition",
    "State Championship",
    "National Event",
    "Regular Match",
    "Trials/Selection",
];
pub const MENTAL_CHALLENGE_OPTIONS: [&str; 6] = [
    "Performance Anxiety",
    "Lack of Focus",
    "Pressure Handling",
    "Confidence Issues",
    "Motivation",
    "Pre-game Nerves",
];

/// Shape of a form field, used for validation and for building prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number { min: u16, max: u16, step: u16, initial: u16 },
    Choice(&'static [&'static str]),
    MultiChoice(&'static [&'static str]),
    Text,
}

/// Every feature-specific form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TrainingDays,
    SessionDuration,
    Intensity,
    Equipment,
    InjuryHistory,
    InjurySeverity,
    DietType,
    Allergies,
    CalorieGoal,
    MealCount,
    SkillFocus,
    TacticalGoal,
    EventType,
    DaysUntil,
    MentalChallenges,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::TrainingDays => "training_days",
            Field::SessionDuration => "session_duration",
            Field::Intensity => "intensity",
            Field::Equipment => "equipment",
            Field::InjuryHistory => "injury_history",
            Field::InjurySeverity => "injury_severity",
            Field::DietType => "diet_type",
            Field::Allergies => "allergies",
            Field::CalorieGoal => "calorie_goal",
            Field::MealCount => "meal_count",
            Field::SkillFocus => "skill_focus",
            Field::TacticalGoal => "tactical_goal",
            Field::EventType => "event_type",
            Field::DaysUntil => "days_until",
            Field::MentalChallenges => "mental_challenges",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::TrainingDays => "Training Days per Week",
            Field::SessionDuration => "Session Duration (minutes)",
            Field::Intensity => "Preferred Intensity",
            Field::Equipment => "Available Equipment",
            Field::InjuryHistory => "Injury History (describe any past or current injuries)",
            Field::InjurySeverity => "Current Injury Status",
            Field::DietType => "Diet Preference",
            Field::Allergies => "Food Allergies/Restrictions",
            Field::CalorieGoal => "Calorie Goal",
            Field::MealCount => "Meals per Day",
            Field::SkillFocus => "Skill to Improve",
            Field::TacticalGoal => "Specific Tactical Goal",
            Field::EventType => "Upcoming Event",
            Field::DaysUntil => "Days Until Event",
            Field::MentalChallenges => "Mental Challenges",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::TrainingDays => FieldKind::Number { min: 1, max: 7, step: 1, initial: 4 },
            Field::SessionDuration => {
                FieldKind::Number { min: 30, max: 120, step: 15, initial: 60 }
            }
            Field::MealCount => FieldKind::Number { min: 3, max: 6, step: 1, initial: 4 },
            Field::DaysUntil => FieldKind::Number { min: 1, max: 90, step: 1, initial: 7 },
            Field::Intensity => FieldKind::Choice(&INTENSITY_OPTIONS),
            Field::InjurySeverity => FieldKind::Choice(&INJURY_STATUS_OPTIONS),
            Field::DietType => FieldKind::Choice(&DIET_OPTIONS),
            Field::CalorieGoal => FieldKind::Choice(&CALORIE_GOAL_OPTIONS),
            Field::EventType => FieldKind::Choice(&EVENT_OPTIONS),
            Field::Equipment => FieldKind::MultiChoice(&EQUIPMENT_OPTIONS),
            Field::MentalChallenges => FieldKind::MultiChoice(&MENTAL_CHALLENGE_OPTIONS),
            Field::InjuryHistory | Field::TacticalGoal | Field::Allergies | Field::SkillFocus => {
                FieldKind::Text
            }
        }
    }

    /// Example text shown as a hint for free-text fields.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::InjuryHistory => {
                Some("e.g., Knee sprain 3 months ago, recovering from ankle strain")
            }
            Field::Allergies => Some("e.g., lactose intolerant, nut allergy"),
            Field::SkillFocus => {
                Some("e.g., passing accuracy, shooting power, defensive positioning")
            }
            Field::TacticalGoal => Some(
                "e.g., improve decision-making in final third, better positioning on corners",
            ),
            _ => None,
        }
    }
}

/// Training-load fields shared by several features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingInputs {
    pub training_days: Option<u8>,
    pub session_duration: Option<u16>,
    pub intensity: Option<String>,
    pub equipment: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjuryInputs {
    pub injury_history: Option<String>,
    pub injury_severity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionInputs {
    pub diet_type: Option<String>,
    pub allergies: Option<String>,
    pub calorie_goal: Option<String>,
    pub meal_count: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TacticalInputs {
    pub skill_focus: Option<String>,
    pub tactical_goal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentalInputs {
    pub event_type: Option<String>,
    pub days_until: Option<u8>,
    pub mental_challenges: Vec<String>,
}

/// A selected feature together with the inputs its template uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureInputs {
    WorkoutPlan(TrainingInputs),
    InjuryRecovery { injury: InjuryInputs, training: TrainingInputs },
    TacticalTips(TacticalInputs),
    NutritionGuide(NutritionInputs),
    WarmupCooldown(TrainingInputs),
    MentalPrep(MentalInputs),
    Hydration(TrainingInputs),
    Visualization,
    PositionDrills(TrainingInputs),
    MobilityWorkout(InjuryInputs),
}

impl FeatureInputs {
    /// Inputs for `feature` with every optional field left empty.
    pub fn empty(feature: FeatureCode) -> Self {
        match feature {
            FeatureCode::WorkoutPlan => FeatureInputs::WorkoutPlan(TrainingInputs::default()),
            FeatureCode::InjuryRecovery => FeatureInputs::InjuryRecovery {
                injury: InjuryInputs::default(),
                training: TrainingInputs::default(),
            },
            FeatureCode::TacticalTips => FeatureInputs::TacticalTips(TacticalInputs::default()),
            FeatureCode::NutritionGuide => {
                FeatureInputs::NutritionGuide(NutritionInputs::default())
            }
            FeatureCode::WarmupCooldown => FeatureInputs::WarmupCooldown(TrainingInputs::default()),
            FeatureCode::MentalPrep => FeatureInputs::MentalPrep(MentalInputs::default()),
            FeatureCode::Hydration => FeatureInputs::Hydration(TrainingInputs::default()),
            FeatureCode::Visualization => FeatureInputs::Visualization,
            FeatureCode::PositionDrills => FeatureInputs::PositionDrills(TrainingInputs::default()),
            FeatureCode::MobilityWorkout => FeatureInputs::MobilityWorkout(InjuryInputs::default()),
        }
    }

    /// Build typed inputs from raw form values.
    ///
    /// Keys the feature does not use are ignored; blank values count as absent.
    pub fn from_fields(feature: FeatureCode, fields: &FieldMap) -> Result<Self, AppError> {
        let values = FieldReader { fields };
        let training = || -> Result<TrainingInputs, AppError> {
            Ok(TrainingInputs {
                training_days: values.number(Field::TrainingDays)?.map(|v| v as u8),
                session_duration: values.number(Field::SessionDuration)?,
                intensity: values.choice(Field::Intensity)?,
                equipment: values.multi_choice(Field::Equipment)?,
            })
        };
        let injury = || -> Result<InjuryInputs, AppError> {
            Ok(InjuryInputs {
                injury_history: values.text(Field::InjuryHistory),
                injury_severity: values.choice(Field::InjurySeverity)?,
            })
        };

        let inputs = match feature {
            FeatureCode::WorkoutPlan => FeatureInputs::WorkoutPlan(training()?),
            FeatureCode::InjuryRecovery => {
                FeatureInputs::InjuryRecovery { injury: injury()?, training: training()? }
            }
            FeatureCode::TacticalTips => FeatureInputs::TacticalTips(TacticalInputs {
                skill_focus: values.text(Field::SkillFocus),
                tactical_goal: values.text(Field::TacticalGoal),
            }),
            FeatureCode::NutritionGuide => FeatureInputs::NutritionGuide(NutritionInputs {
                diet_type: values.choice(Field::DietType)?,
                allergies: values.text(Field::Allergies),
                calorie_goal: values.choice(Field::CalorieGoal)?,
                meal_count: values.number(Field::MealCount)?.map(|v| v as u8),
            }),
            FeatureCode::WarmupCooldown => FeatureInputs::WarmupCooldown(training()?),
            FeatureCode::MentalPrep => FeatureInputs::MentalPrep(MentalInputs {
                event_type: values.choice(Field::EventType)?,
                days_until: values.number(Field::DaysUntil)?.map(|v| v as u8),
                mental_challenges: values.multi_choice(Field::MentalChallenges)?,
            }),
            FeatureCode::Hydration => FeatureInputs::Hydration(training()?),
            FeatureCode::Visualization => FeatureInputs::Visualization,
            FeatureCode::PositionDrills => FeatureInputs::PositionDrills(training()?),
            FeatureCode::MobilityWorkout => FeatureInputs::MobilityWorkout(injury()?),
        };
        Ok(inputs)
    }

    /// The feature these inputs belong to.
    pub fn feature(&self) -> FeatureCode {
        match self {
            FeatureInputs::WorkoutPlan(_) => FeatureCode::WorkoutPlan,
            FeatureInputs::InjuryRecovery { .. } => FeatureCode::InjuryRecovery,
            FeatureInputs::TacticalTips(_) => FeatureCode::TacticalTips,
            FeatureInputs::NutritionGuide(_) => FeatureCode::NutritionGuide,
            FeatureInputs::WarmupCooldown(_) => FeatureCode::WarmupCooldown,
            FeatureInputs::MentalPrep(_) => FeatureCode::MentalPrep,
            FeatureInputs::Hydration(_) => FeatureCode::Hydration,
            FeatureInputs::Visualization => FeatureCode::Visualization,
            FeatureInputs::PositionDrills(_) => FeatureCode::PositionDrills,
            FeatureInputs::MobilityWorkout(_) => FeatureCode::MobilityWorkout,
        }
    }
}

struct FieldReader<'a> {
    fields: &'a FieldMap,
}

impl FieldReader<'_> {
    fn raw(&self, field: Field) -> Option<&str> {
        self.fields.get(field.key()).map(|value| value.trim()).filter(|value| !value.is_empty())
    }

    fn text(&self, field: Field) -> Option<String> {
        self.raw(field).map(str::to_string)
    }

    fn number(&self, field: Field) -> Result<Option<u16>, AppError> {
        let Some(raw) = self.raw(field) else {
            return Ok(None);
        };
        let FieldKind::Number { min, max, step, .. } = field.kind() else {
            return Err(AppError::invalid_input(field.key(), "field is not numeric"));
        };
        let value: u16 = raw.parse().map_err(|_| {
            AppError::invalid_input(field.key(), format!("'{}' is not a number", raw))
        })?;
        if !(min..=max).contains(&value) {
            return Err(AppError::invalid_input(
                field.key(),
                format!("{} is outside the range {}-{}", value, min, max),
            ));
        }
        if (value - min) % step != 0 {
            return Err(AppError::invalid_input(
                field.key(),
                format!("{} is not a multiple of {} from {}", value, step, min),
            ));
        }
        Ok(Some(value))
    }

    fn choice(&self, field: Field) -> Result<Option<String>, AppError> {
        let Some(raw) = self.raw(field) else {
            return Ok(None);
        };
        let FieldKind::Choice(options) = field.kind() else {
            return Err(AppError::invalid_input(field.key(), "field is not a single choice"));
        };
        canonical_option(field, options, raw).map(Some)
    }

    fn multi_choice(&self, field: Field) -> Result<Vec<String>, AppError> {
        let Some(raw) = self.raw(field) else {
            return Ok(Vec::new());
        };
        let FieldKind::MultiChoice(options) = field.kind() else {
            return Err(AppError::invalid_input(field.key(), "field is not a multi choice"));
        };
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| canonical_option(field, options, item))
            .collect()
    }
}

fn canonical_option(field: Field, options: &[&str], raw: &str) -> Result<String, AppError> {
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(raw))
        .map(|option| option.to_string())
        .ok_or_else(|| {
            AppError::invalid_input(
                field.key(),
                format!("'{}' is not one of: {}", raw, options.join(", ")),
            )
        })
}
