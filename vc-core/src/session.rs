//! The wizard session: one owned aggregate plus the current step.

use crate::application::{ApplicationRecord, ApplicationUpdate};
use crate::steps::OnboardingStep;

/// Owns the application record for the lifetime of one onboarding run and
/// gates every mutation behind a narrow API. Steps hand partial updates up
/// through [`OnboardingSession::merge_update`]; nothing else writes to the
/// record.
#[derive(Debug, Clone, Default)]
pub struct OnboardingSession {
    record: ApplicationRecord,
    step: OnboardingStep,
}

impl OnboardingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &ApplicationRecord {
        &self.record
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Move to the next step. Callers must only invoke this after the current
    /// step's local validation passed; on the last step it is a no-op.
    pub fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    /// Move to the previous step, unconditionally. The first step's view
    /// offers no back action, so this is a no-op there.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Jump straight to a step. Used by the summary's "edit documents"
    /// action.
    pub fn jump_to(&mut self, step: OnboardingStep) {
        self.step = step;
    }

    pub fn merge_update(&mut self, update: ApplicationUpdate) {
        self.record.merge(update);
    }
}
