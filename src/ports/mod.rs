mod artifact_store;
mod collector;
mod generation_client;

pub use artifact_store::ArtifactStore;
pub use collector::{Collector, NextAction};
pub use generation_client::GenerationClient;
