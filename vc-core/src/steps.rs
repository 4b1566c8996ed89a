//! The ordered step sequence of the onboarding wizard.

/// Defines the sequence of steps in the onboarding flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnboardingStep {
    #[default]
    PersonalData,
    Address,
    WorkData,
    Documents,
    Summary,
}

impl OnboardingStep {
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::PersonalData,
            OnboardingStep::Address,
            OnboardingStep::WorkData,
            OnboardingStep::Documents,
            OnboardingStep::Summary,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::PersonalData => "Personal Data",
            OnboardingStep::Address => "Address",
            OnboardingStep::WorkData => "Employment",
            OnboardingStep::Documents => "Documents",
            OnboardingStep::Summary => "Summary",
        }
    }

    /// 1-based position, matching the "step N of 5" header.
    pub fn index(&self) -> usize {
        match self {
            OnboardingStep::PersonalData => 1,
            OnboardingStep::Address => 2,
            OnboardingStep::WorkData => 3,
            OnboardingStep::Documents => 4,
            OnboardingStep::Summary => 5,
        }
    }

    // Helper to get the next step in the sequence.
    // Flow: Personal Data → Address → Employment → Documents → Summary
    pub fn next(&self) -> Option<OnboardingStep> {
        match self {
            OnboardingStep::PersonalData => Some(OnboardingStep::Address),
            OnboardingStep::Address => Some(OnboardingStep::WorkData),
            OnboardingStep::WorkData => Some(OnboardingStep::Documents),
            OnboardingStep::Documents => Some(OnboardingStep::Summary),
            OnboardingStep::Summary => None,
        }
    }

    // Helper to get the previous step in the sequence. The first step offers
    // no back action.
    pub fn prev(&self) -> Option<OnboardingStep> {
        match self {
            OnboardingStep::PersonalData => None,
            OnboardingStep::Address => Some(OnboardingStep::PersonalData),
            OnboardingStep::WorkData => Some(OnboardingStep::Address),
            OnboardingStep::Documents => Some(OnboardingStep::WorkData),
            OnboardingStep::Summary => Some(OnboardingStep::Documents),
        }
    }
}
