//! Feature catalog listing.

use crate::domain::FeatureCode;

/// One catalog row: code, menu label, and the form keys it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSummary {
    pub code: &'static str,
    pub label: &'static str,
    pub field_keys: Vec<&'static str>,
}

/// All ten features in menu order.
pub fn list() -> Vec<FeatureSummary> {
    FeatureCode::ALL
        .iter()
        .map(|feature| FeatureSummary {
            code: feature.code(),
            label: feature.label(),
            field_keys: feature.fields().iter().map(|field| field.key()).collect(),
        })
        .collect()
}
