//! Terminal form built on dialoguer.

use dialoguer::{Input, MultiSelect, Select};

use crate::domain::profile::{DEFAULT_AGE, MAX_AGE, MIN_AGE};
use crate::domain::{
    AppError, AthleteProfile, ExperienceLevel, FeatureCode, FeatureInputs, Field, FieldKind,
    FieldMap, Gender, Sport,
};
use crate::ports::{Collector, NextAction};

const GOAL_PLACEHOLDER: &str =
    "e.g., build stamina for full match, recover from injury, prepare for tournament";

/// Collector prompting on the controlling terminal.
#[derive(Debug, Default)]
pub struct DialoguerCollector;

impl DialoguerCollector {
    pub fn new() -> Self {
        Self
    }
}

fn interaction(what: &str) -> impl FnOnce(dialoguer::Error) -> AppError + '_ {
    move |err| AppError::Interaction(format!("{}: {}", what, err))
}

fn select<T: ToString>(prompt: &str, items: &[T], default: usize) -> Result<usize, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(interaction(prompt))
}

fn ask_number(prompt: &str, min: u16, max: u16, step: u16, initial: u16) -> Result<u16, AppError> {
    Input::<u16>::new()
        .with_prompt(format!("{} ({}-{})", prompt, min, max))
        .default(initial)
        .validate_with(move |value: &u16| -> Result<(), String> {
            if !(min..=max).contains(value) {
                return Err(format!("Enter a value between {} and {}", min, max));
            }
            if (value - min) % step != 0 {
                return Err(format!("Use steps of {} starting at {}", step, min));
            }
            Ok(())
        })
        .interact_text()
        .map_err(interaction(prompt))
}

fn ask_text(prompt: &str, placeholder: Option<&str>) -> Result<String, AppError> {
    if let Some(hint) = placeholder {
        eprintln!("  {}", hint);
    }
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(interaction(prompt))
}

fn ask_field(field: Field) -> Result<String, AppError> {
    match field.kind() {
        FieldKind::Number { min, max, step, initial } => {
            ask_number(field.label(), min, max, step, initial).map(|value| value.to_string())
        }
        FieldKind::Choice(options) => {
            select(field.label(), options, 0).map(|index| options[index].to_string())
        }
        FieldKind::MultiChoice(options) => {
            let chosen = MultiSelect::new()
                .with_prompt(format!("{} (space to toggle, enter to confirm)", field.label()))
                .items(options)
                .interact()
                .map_err(interaction(field.label()))?;
            Ok(chosen.into_iter().map(|index| options[index]).collect::<Vec<_>>().join(","))
        }
        FieldKind::Text => ask_text(field.label(), field.placeholder()),
    }
}

impl Collector for DialoguerCollector {
    fn collect_profile(&mut self) -> Result<AthleteProfile, AppError> {
        let sports: Vec<&str> = Sport::ALL.iter().map(Sport::display_name).collect();
        let sport = Sport::ALL[select("Sport", &sports, 0)?];

        let age = ask_number("Age", MIN_AGE.into(), MAX_AGE.into(), 1, DEFAULT_AGE.into())?;

        let genders: Vec<&str> = Gender::ALL.iter().map(Gender::display_name).collect();
        let gender = Gender::ALL[select("Gender", &genders, 0)?];

        let positions = sport.positions();
        let position = positions[select("Position/Specialization", positions, 0)?];

        let levels: Vec<&str> =
            ExperienceLevel::ALL.iter().map(ExperienceLevel::display_name).collect();
        let experience = ExperienceLevel::ALL[select("Experience Level", &levels, 0)?];

        let age = u8::try_from(age).map_err(|_| AppError::invalid_input("age", age.to_string()))?;
        AthleteProfile::new(sport, age, gender, position, experience)
    }

    fn collect_feature(&mut self) -> Result<FeatureCode, AppError> {
        let labels: Vec<String> = FeatureCode::ALL
            .iter()
            .enumerate()
            .map(|(index, feature)| format!("{:>2}. {}", index + 1, feature.label()))
            .collect();
        let index = select("Choose a coaching feature", &labels, 0)?;
        Ok(FeatureCode::ALL[index])
    }

    fn collect_feature_inputs(&mut self, feature: FeatureCode) -> Result<FeatureInputs, AppError> {
        let mut fields = FieldMap::new();
        for field in feature.fields() {
            fields.insert(field.key().to_string(), ask_field(*field)?);
        }
        FeatureInputs::from_fields(feature, &fields)
    }

    fn collect_goal(&mut self) -> Result<String, AppError> {
        ask_text("Your Primary Goal", Some(GOAL_PLACEHOLDER)).map(|goal| goal.trim().to_string())
    }

    fn next_action(&mut self, succeeded: bool) -> Result<NextAction, AppError> {
        let mut menu = Vec::new();
        if succeeded {
            menu.push(("👍 Helpful", NextAction::Helpful));
            menu.push(("👎 Not Helpful", NextAction::NotHelpful));
            menu.push(("🔄 Generate Again", NextAction::GenerateAgain));
        } else {
            menu.push(("🔄 Try Again", NextAction::GenerateAgain));
        }
        menu.push(("🎯 New Coaching Plan", NextAction::NewPlan));
        menu.push(("👤 Change Athlete Profile", NextAction::ChangeProfile));
        menu.push(("📚 View Coaching History", NextAction::ViewHistory));
        menu.push(("🚪 Quit", NextAction::Quit));

        let labels: Vec<&str> = menu.iter().map(|(label, _)| *label).collect();
        let selection = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(interaction("What next?"))?;

        Ok(selection.map_or(NextAction::Quit, |index| menu[index].1))
    }
}
