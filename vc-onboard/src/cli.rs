//! CLI argument parsing.
//!
//! The interactive wizard is the default entry point when no subcommand is
//! provided.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vc-onboard")]
#[command(about = "VC credit-application onboarding wizard")]
#[command(long_about = "VC credit-application onboarding wizard\n\n\
    A five-step terminal wizard collecting personal data, address, employment,\n\
    and documents for a consumer-credit application.\n\n\
    Run without arguments to launch the interactive wizard.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every screen's rendered text to stdout and exit
    DumpSteps,
}
