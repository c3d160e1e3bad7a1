//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Write;

use sxhkhm::keymap::{ExpandedKeybind, Keybinds};
use tempfile::NamedTempFile;

/// Write `text` to a temporary sxhkdrc, kept alive by the returned handle
pub fn sxhkdrc_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Build a keybind from its four fields
pub fn keybind(category: &str, description: &str, keystroke: &str, command: &str) -> ExpandedKeybind {
    ExpandedKeybind {
        category: category.to_string(),
        description: description.to_string(),
        keystroke: keystroke.to_string(),
        command: command.to_string(),
    }
}

/// (description, keystroke, command) triples, category dropped
pub fn triples(keybinds: &Keybinds) -> Vec<(String, String, String)> {
    keybinds
        .iter()
        .map(|b| (b.description.clone(), b.keystroke.clone(), b.command.clone()))
        .collect()
}
