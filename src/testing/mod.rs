mod fake_generation_client;
mod memory_artifact_store;
mod scripted_collector;

pub use fake_generation_client::FakeGenerationClient;
pub use memory_artifact_store::MemoryArtifactStore;
pub use scripted_collector::ScriptedCollector;

use crate::domain::{AthleteProfile, ExperienceLevel, Gender, Sport};

/// The 15-year-old intermediate midfielder used across tests.
pub fn midfielder_profile() -> AthleteProfile {
    AthleteProfile::new(
        Sport::Football,
        15,
        Gender::Male,
        "Midfielder",
        ExperienceLevel::Intermediate,
    )
    .unwrap()
}
