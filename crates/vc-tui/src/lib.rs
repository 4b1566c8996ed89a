//! Terminal UI for the onboarding wizard.

pub mod input;
pub mod widgets;
pub mod wizard;
