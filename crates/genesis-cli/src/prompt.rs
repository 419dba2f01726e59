//! Interactive fallbacks for values not passed as flags.
//!
//! Prompts are shown only when the `interactive` feature is compiled in and
//! both stdin and stderr are terminals. Otherwise a missing required value is
//! a [`CliError::MissingArgument`] and a missing optional value takes its
//! default.

use std::io::IsTerminal;

use crate::error::{CliError, CliResult};

/// Whether prompting is possible in this process.
pub fn is_interactive() -> bool {
    cfg!(feature = "interactive")
        && std::io::stdin().is_terminal()
        && std::io::stderr().is_terminal()
}

/// `value`, else a prompt, else [`CliError::MissingArgument`].
pub fn required(value: Option<String>, flag: &'static str, message: &str) -> CliResult<String> {
    match value {
        Some(value) => Ok(value),
        None if is_interactive() => ask_text(message, None),
        None => Err(CliError::MissingArgument { flag }),
    }
}

/// `value`, else a prompt pre-filled with `default`, else `default`.
pub fn with_default(value: Option<String>, message: &str, default: String) -> CliResult<String> {
    match value {
        Some(value) => Ok(value),
        None if is_interactive() => ask_text(message, Some(default)),
        None => Ok(default),
    }
}

/// `value`, else a pick from `choices`, else [`CliError::MissingArgument`].
pub fn choose<T: Copy>(
    value: Option<T>,
    flag: &'static str,
    message: &str,
    choices: &[(&str, T)],
) -> CliResult<T> {
    match value {
        Some(value) => Ok(value),
        None if is_interactive() => {
            let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();
            let index = ask_select(message, &labels)?;
            choices
                .get(index)
                .map(|(_, choice)| *choice)
                .ok_or(CliError::Cancelled)
        }
        None => Err(CliError::MissingArgument { flag }),
    }
}

/// Yes/no question; `default` when not interactive.
pub fn confirm(message: &str, default: bool) -> CliResult<bool> {
    if is_interactive() {
        ask_confirm(message, default)
    } else {
        Ok(default)
    }
}

#[cfg(feature = "interactive")]
fn ask_text(message: &str, default: Option<String>) -> CliResult<String> {
    use dialoguer::{Input, theme::ColorfulTheme};

    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(message);
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?)
}

#[cfg(feature = "interactive")]
fn ask_select(message: &str, labels: &[&str]) -> CliResult<usize> {
    use dialoguer::{FuzzySelect, theme::ColorfulTheme};

    Ok(FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .items(labels)
        .default(0)
        .interact()?)
}

#[cfg(feature = "interactive")]
fn ask_confirm(message: &str, default: bool) -> CliResult<bool> {
    use dialoguer::{Confirm, theme::ColorfulTheme};

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(default)
        .interact()?)
}

#[cfg(not(feature = "interactive"))]
fn ask_text(_message: &str, _default: Option<String>) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn ask_select(_message: &str, _labels: &[&str]) -> CliResult<usize> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn ask_confirm(_message: &str, _default: bool) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
