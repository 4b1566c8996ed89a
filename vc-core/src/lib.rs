//! Core onboarding library.
//!
//! `vc-core` holds the domain types and wizard state shared by the TUI crate
//! and the `vc-onboard` binary: the application aggregate and its partial-merge
//! rules, the step sequence, per-field validation, per-step form state, and the
//! final submission gate.

pub mod application;
pub mod form;
pub mod logging;
pub mod session;
pub mod steps;
pub mod submit;
pub mod validation;
