//! Shared terminal guard for the wizard entry point.

use std::io::IsTerminal;

use vc_error::OnboardError;

pub fn ensure_interactive_terminal() -> anyhow::Result<()> {
    if std::io::stdout().is_terminal() {
        return Ok(());
    }

    log::error!("refusing to start: stdout is not a terminal");
    Err(OnboardError::NoTerminal.into())
}
