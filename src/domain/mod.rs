pub mod artifact;
pub mod configuration;
mod error;
pub mod feature;
pub mod generation;
pub mod history;
pub mod profile;
pub mod prompt;
pub mod session;

pub use artifact::PlanArtifact;
pub use configuration::{AppConfig, GeminiApiConfig};
pub use error::AppError;
pub use feature::{
    FeatureCode, FeatureInputs, Field, FieldKind, FieldMap, InjuryInputs, MentalInputs,
    NutritionInputs, TacticalInputs, TrainingInputs,
};
pub use generation::{GenerationConfig, GenerationRequest};
pub use history::{CoachingResult, History, HistoryEntry};
pub use profile::{AthleteProfile, ExperienceLevel, Gender, Sport};
pub use prompt::PromptContext;
pub use session::{ApiKey, ConfigurationState, SessionContext};
