use std::collections::VecDeque;

use crate::domain::{AppError, AthleteProfile, FeatureCode, FeatureInputs};
use crate::ports::{Collector, NextAction};

/// Collector replaying fixed answers; actions are consumed in order.
pub struct ScriptedCollector {
    pub profile: AthleteProfile,
    pub features: VecDeque<FeatureInputs>,
    pub goal: String,
    pub actions: VecDeque<NextAction>,
    pub profile_requests: usize,
    pub outcomes_seen: Vec<bool>,
}

impl ScriptedCollector {
    pub fn new(profile: AthleteProfile, inputs: FeatureInputs, goal: &str) -> Self {
        Self {
            profile,
            features: VecDeque::from([inputs]),
            goal: goal.to_string(),
            actions: VecDeque::new(),
            profile_requests: 0,
            outcomes_seen: Vec::new(),
        }
    }

    pub fn then_feature(mut self, inputs: FeatureInputs) -> Self {
        self.features.push_back(inputs);
        self
    }

    pub fn with_actions(mut self, actions: &[NextAction]) -> Self {
        self.actions.extend(actions.iter().copied());
        self
    }
}

impl Collector for ScriptedCollector {
    fn collect_profile(&mut self) -> Result<AthleteProfile, AppError> {
        self.profile_requests += 1;
        Ok(self.profile.clone())
    }

    fn collect_feature(&mut self) -> Result<FeatureCode, AppError> {
        self.features
            .front()
            .map(FeatureInputs::feature)
            .ok_or_else(|| AppError::Interaction("script has no more features".to_string()))
    }

    fn collect_feature_inputs(&mut self, feature: FeatureCode) -> Result<FeatureInputs, AppError> {
        let inputs = self
            .features
            .pop_front()
            .ok_or_else(|| AppError::Interaction("script has no more features".to_string()))?;
        assert_eq!(inputs.feature(), feature, "scripted inputs out of order");
        Ok(inputs)
    }

    fn collect_goal(&mut self) -> Result<String, AppError> {
        Ok(self.goal.clone())
    }

    fn next_action(&mut self, succeeded: bool) -> Result<NextAction, AppError> {
        self.outcomes_seen.push(succeeded);
        Ok(self.actions.pop_front().unwrap_or(NextAction::Quit))
    }
}
