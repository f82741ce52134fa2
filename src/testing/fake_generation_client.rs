use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, GenerationRequest};
use crate::ports::GenerationClient;

/// Generation client returning scripted outcomes and recording every request.
#[derive(Clone, Default)]
pub struct FakeGenerationClient {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    outcomes: Arc<Mutex<VecDeque<Result<String, String>>>>,
}

impl FakeGenerationClient {
    /// Client answering every request with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        let client = Self::default();
        client.push_reply(text);
        client
    }

    /// Client failing the first request with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        let client = Self::default();
        client.push_failure(message);
        client
    }

    pub fn push_reply(&self, text: impl Into<String>) {
        self.outcomes.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn push_failure(&self, message: impl Into<String>) {
        self.outcomes.lock().unwrap().push_back(Err(message.into()));
    }

    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut outcomes = self.outcomes.lock().unwrap();
        // The last scripted outcome repeats once the queue would run dry.
        let outcome =
            if outcomes.len() > 1 { outcomes.pop_front() } else { outcomes.front().cloned() };
        match outcome {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(AppError::GenerationFailed(message)),
            None => Err(AppError::GenerationFailed("no scripted outcome".to_string())),
        }
    }
}
