//! Remote text-generation port definition.

use crate::domain::{AppError, GenerationRequest};

/// Port for the hosted text-generation service.
///
/// Implementations make exactly one attempt per call and report every
/// failure as [`AppError::GenerationFailed`].
pub trait GenerationClient {
    /// Generate text for the request and return it unmodified.
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError>;
}
