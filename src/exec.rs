//! Run the command bound to a keystroke
//!
//! Matching is exact string equality against the expanded keystroke, so
//! `super + 1` matches but `super+1` does not.

use std::process::{Command, ExitStatus};

use crate::keymap::Keybinds;

/// Runs a command line through a shell
pub trait ShellRunner {
    fn run(&self, command: &str) -> std::io::Result<ExitStatus>;
}

/// `sh -c <command>`, waiting for it to finish
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl ShellRunner for SystemShell {
    fn run(&self, command: &str) -> std::io::Result<ExitStatus> {
        Command::new("sh").arg("-c").arg(command).status()
    }
}

/// Run every command bound to `keystroke`, in document order
///
/// Returns the commands that were run. A non-zero exit status is logged, not an error.
pub fn run_matching(
    keybinds: &Keybinds,
    keystroke: &str,
    shell: &dyn ShellRunner,
) -> Result<Vec<String>, ExecError> {
    let commands: Vec<String> = keybinds
        .matching(keystroke)
        .map(|bind| bind.command.clone())
        .collect();

    if commands.is_empty() {
        return Err(ExecError::NoMatch(keystroke.to_string()));
    }

    for command in &commands {
        tracing::info!("Running '{}' for '{}'", command, keystroke);
        let status = shell.run(command).map_err(|e| ExecError::Spawn {
            command: command.clone(),
            message: e.to_string(),
        })?;
        if !status.success() {
            tracing::warn!("'{}' exited with {}", command, status);
        }
    }

    Ok(commands)
}

/// Errors that can occur when executing a keybind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// No keybind has this keystroke
    NoMatch(String),
    /// The shell could not be started
    Spawn { command: String, message: String },
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecError::NoMatch(keystroke) => write!(f, "No keybind matches '{}'", keystroke),
            ExecError::Spawn { command, message } => {
                write!(f, "Failed to run '{}': {}", command, message)
            }
        }
    }
}

impl std::error::Error for ExecError {}
