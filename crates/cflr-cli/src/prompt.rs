//! Interactive selection
//!
//! The command handlers only see the [`Picker`] trait; the terminal
//! implementation is backed by dialoguer.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

/// Single-select prompt over a list of choices
pub trait Picker {
    /// Ask the user to pick one of `choices`.
    ///
    /// Returns the chosen index, or `None` if the user cancelled.
    fn pick(&self, prompt: &str, choices: &[String]) -> Result<Option<usize>>;
}

/// Arrow-key selection on the controlling terminal
pub struct TerminalPicker;

/// Checks if the prompt can run: keys are read from stdin and the menu is
/// drawn on stderr. Stdout may be redirected.
pub fn is_interactive_terminal() -> bool {
    can_prompt(std::io::stdin().is_terminal(), std::io::stderr().is_terminal())
}

fn can_prompt(stdin_is_tty: bool, stderr_is_tty: bool) -> bool {
    stdin_is_tty && stderr_is_tty
}

impl Picker for TerminalPicker {
    fn pick(&self, prompt: &str, choices: &[String]) -> Result<Option<usize>> {
        if !is_interactive_terminal() {
            anyhow::bail!(
                "Selecting an email domain requires a terminal. \
                 Run this command from an interactive shell."
            );
        }

        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(choices)
            .default(0)
            .interact_opt()
            .context("Failed to read selection")
    }
}
