//! Non-interactive prompt preview.

use crate::domain::{AppError, AthleteProfile, ExperienceLevel, FieldMap, Gender, Sport};
use crate::services::prompt_compiler;

/// Raw values for a preview, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct PromptPreviewOptions {
    pub feature: String,
    pub sport: String,
    pub age: u8,
    pub gender: String,
    pub position: String,
    pub experience: String,
    /// `key=value` pairs for feature-specific fields.
    pub fields: Vec<String>,
    pub goal: String,
}

/// Compile the prompt described by `options` without contacting any service.
pub fn execute(options: &PromptPreviewOptions) -> Result<String, AppError> {
    let profile = AthleteProfile::new(
        Sport::from_name(&options.sport)?,
        options.age,
        Gender::from_name(&options.gender)?,
        &options.position,
        ExperienceLevel::from_name(&options.experience)?,
    )?;
    let fields = parse_field_pairs(&options.fields)?;

    prompt_compiler::compile_code(&profile, &options.feature, &fields, &options.goal)
}

/// Parse `key=value` pairs; later pairs win on duplicate keys.
pub fn parse_field_pairs(pairs: &[String]) -> Result<FieldMap, AppError> {
    let mut fields = FieldMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| AppError::invalid_input(pair.as_str(), "expected key=value"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::invalid_input(pair.as_str(), "field name is empty"));
        }
        fields.insert(key.to_string(), value.trim().to_string());
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warmup_options() -> PromptPreviewOptions {
        PromptPreviewOptions {
            feature: "warmup_cooldown".into(),
            sport: "Football/Soccer".into(),
            age: 15,
            gender: "Male".into(),
            position: "Midfielder".into(),
            experience: "Intermediate".into(),
            fields: vec!["intensity=Moderate".into(), "session_duration=60".into()],
            goal: String::new(),
        }
    }

    #[test]
    fn preview_compiles_warmup_prompt() {
        let prompt = execute(&warmup_options()).unwrap();
        let needles = ["Football/Soccer", "Midfielder", "60 minutes session", "Moderate intensity"];
        for needle in needles {
            assert!(prompt.contains(needle), "missing '{}'", needle);
        }
    }

    #[test]
    fn preview_rejects_unknown_feature() {
        let options = PromptPreviewOptions { feature: "yoga".into(), ..warmup_options() };
        assert!(matches!(execute(&options), Err(AppError::UnknownFeature(_))));
    }

    #[test]
    fn preview_rejects_position_from_another_sport() {
        let options = PromptPreviewOptions { position: "Wicket-keeper".into(), ..warmup_options() };
        assert!(matches!(execute(&options), Err(AppError::InvalidPosition { .. })));
    }

    #[test]
    fn preview_rejects_age_out_of_range() {
        let options = PromptPreviewOptions { age: 30, ..warmup_options() };
        assert!(matches!(execute(&options), Err(AppError::AgeOutOfRange(30))));
    }

    #[test]
    fn field_pairs_require_separator() {
        let err = parse_field_pairs(&["intensity".to_string()]).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { .. }));

        let fields =
            parse_field_pairs(&["equipment = Gym, Track".into(), "equipment=Pool".into()]).unwrap();
        assert_eq!(fields.get("equipment").map(String::as_str), Some("Pool"));
    }
}
