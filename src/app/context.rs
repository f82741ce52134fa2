use crate::domain::GenerationConfig;
use crate::ports::{ArtifactStore, GenerationClient};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GenerationClient, A: ArtifactStore> {
    client: G,
    artifacts: A,
    model: String,
    generation: GenerationConfig,
}

impl<G: GenerationClient, A: ArtifactStore> AppContext<G, A> {
    /// Create a new application context.
    pub fn new(
        client: G,
        artifacts: A,
        model: impl Into<String>,
        generation: GenerationConfig,
    ) -> Self {
        Self { client, artifacts, model: model.into(), generation }
    }

    /// Get a reference to the generation client.
    pub fn client(&self) -> &G {
        &self.client
    }

    /// Get a reference to the artifact store.
    pub fn artifacts(&self) -> &A {
        &self.artifacts
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sampling parameters for this session.
    pub fn generation(&self) -> GenerationConfig {
        self.generation
    }
}
