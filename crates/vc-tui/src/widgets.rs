//! Small, reusable UI helpers used by multiple screens.

use vc_core::steps::OnboardingStep;

/// Marker shown in the step sidebar for one step relative to the current one.
pub fn step_marker(step: OnboardingStep, current: OnboardingStep) -> &'static str {
    if step.index() < current.index() {
        "[x]"
    } else if step == current {
        "[>]"
    } else {
        "[ ]"
    }
}

/// Wizard progress as a 0.0..=1.0 ratio: step 1 of 5 is 0%, step 5 is 100%,
/// same curve as a segmented progress bar with `total - 1` segments.
pub fn progress_ratio(index: usize, total: usize) -> f64 {
    if total <= 1 {
        return 1.0;
    }
    let done = index.saturating_sub(1).min(total - 1);
    done as f64 / (total - 1) as f64
}

/// Presence marker for a document slot.
pub fn slot_symbol(filled: bool) -> &'static str {
    if filled {
        "[x]"
    } else {
        "[ ]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_marker() {
        let current = OnboardingStep::WorkData;
        assert_eq!(step_marker(OnboardingStep::PersonalData, current), "[x]");
        assert_eq!(step_marker(OnboardingStep::WorkData, current), "[>]");
        assert_eq!(step_marker(OnboardingStep::Summary, current), "[ ]");
    }

    #[test]
    fn test_progress_ratio() {
        assert_eq!(progress_ratio(1, 5), 0.0);
        assert_eq!(progress_ratio(3, 5), 0.5);
        assert_eq!(progress_ratio(5, 5), 1.0);
        assert_eq!(progress_ratio(9, 5), 1.0);
        assert_eq!(progress_ratio(1, 1), 1.0);
    }
}
