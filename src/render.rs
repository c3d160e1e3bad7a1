//! Output formats for expanded keybinds
//!
//! - Table: aligned description / keystroke / command columns
//! - Markdown: a cheatsheet grouped by category
//! - Raw: the configuration text as read

use std::io::{self, Write};
use std::path::Path;

use crate::keymap::{ExpandedKeybind, Keybinds};

fn columns(bind: &ExpandedKeybind) -> [&str; 3] {
    [&bind.description, &bind.keystroke, &bind.command]
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Write keybinds as left-aligned columns
///
/// Each column is padded to its widest cell plus one, columns joined by a space.
pub fn write_table<W: Write>(keybinds: &Keybinds, out: &mut W) -> io::Result<()> {
    let mut widths = [0usize; 3];
    for bind in keybinds {
        for (w, cell) in widths.iter_mut().zip(columns(bind)) {
            *w = (*w).max(width(cell));
        }
    }

    for bind in keybinds {
        let row: Vec<String> = columns(bind)
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:<pad$}", cell, pad = w + 1))
            .collect();
        writeln!(out, "{}", row.join(" "))?;
    }

    Ok(())
}

/// Write a markdown cheatsheet, one section per category in order of appearance
pub fn write_markdown<W: Write>(keybinds: &Keybinds, out: &mut W) -> io::Result<()> {
    for category in keybinds.categories() {
        writeln!(out, "# {}", category)?;
        for bind in keybinds.in_category(category) {
            writeln!(
                out,
                "* `{}`: {} - `{}`",
                bind.keystroke, bind.description, bind.command
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Write the configuration location followed by its raw text
pub fn write_raw<W: Write>(path: &Path, text: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "Config location: {}", path.display())?;
    writeln!(out, "{}", text)
}
