use chrono::{DateTime, Utc};

use crate::domain::FeatureCode;

const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Plain-text download offered after a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanArtifact {
    pub file_name: String,
    pub content: String,
}

impl PlanArtifact {
    pub fn new(feature: FeatureCode, generated_at: DateTime<Utc>, content: &str) -> Self {
        Self { file_name: artifact_file_name(feature, generated_at), content: content.to_string() }
    }
}

/// `coachbot_{feature}_{YYYYMMDD_HHMMSS}.txt`
pub fn artifact_file_name(feature: FeatureCode, generated_at: DateTime<Utc>) -> String {
    format!("coachbot_{}_{}.txt", feature.code(), generated_at.format(FILE_TIMESTAMP_FORMAT))
}
