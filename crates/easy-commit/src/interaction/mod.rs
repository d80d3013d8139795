//! Terminal interaction for the commit wizard
//!
//! Drives [`easy_commit_core::run_wizard`] with crossterm key events and a
//! full-screen renderer. The terminal is restored before this returns.

mod terminal;

use std::io::IsTerminal;

use easy_commit_core::{Config, EasyCommitError, WizardOutcome, run_wizard};

use terminal::{CrosstermKeys, TerminalRenderer, TerminalSession};

/// Whether both stdin and stdout are attached to a terminal
pub fn is_interactive_terminal() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Run the wizard on the controlling terminal
pub fn run_interactive(config: &Config) -> Result<WizardOutcome, EasyCommitError> {
    if !is_interactive_terminal() {
        return Err(EasyCommitError::NonTty);
    }

    let _session = TerminalSession::start()?;
    let mut keys = CrosstermKeys;
    let mut renderer = TerminalRenderer::new();
    run_wizard(config, &mut keys, &mut renderer)
}
