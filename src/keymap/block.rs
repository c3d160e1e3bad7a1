//! Block extraction from raw sxhkdrc text
//!
//! A block is three parts:
//!
//! ```text
//! # Focus the node in the given direction      ← description (descriptor prefix)
//! super + {_,shift + }{h,j,k,l}                ← keystroke
//!     bspc node -{f,s} {west,south,north,east}  ← indented command
//! ```
//!
//! The command may span several physical lines joined by a trailing `\`.

use crate::config::ParserConfig;

/// One description/keystroke/command triple, still unexpanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// 0-based line index of the description line
    pub line: usize,
    /// Description with the descriptor prefix removed
    pub description: String,
    pub keystroke: String,
    /// Logical command line: continuations joined, indentation stripped
    pub command: String,
}

/// Extract every block in document order
pub fn extract_blocks(text: &str, config: &ParserConfig) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        match read_block(&lines, index, config) {
            Some((block, next)) => {
                tracing::trace!(line = block.line + 1, keystroke = %block.keystroke, "block");
                blocks.push(block);
                index = next;
            }
            None => index += 1,
        }
    }

    blocks
}

/// Try to read a block whose description sits at `start`.
/// Returns the block and the index of the first line after it.
fn read_block(lines: &[&str], start: usize, config: &ParserConfig) -> Option<(Block, usize)> {
    let first = lines[start];
    if first.starts_with(&config.category_descriptor) {
        return None;
    }
    let description = first.strip_prefix(&config.descriptor)?;

    let keystroke = *lines.get(start + 1)?;
    if !is_keystroke_line(keystroke) {
        tracing::trace!(line = start + 1, "comment without keystroke");
        return None;
    }

    let (commands, next) = read_body(lines, start + 2);
    if commands.is_empty() {
        tracing::trace!(line = start + 2, "keystroke without indented command");
        return None;
    }

    let block = Block {
        line: start,
        description: description.to_string(),
        keystroke: keystroke.trim_end().to_string(),
        command: join_commands(&commands),
    };
    Some((block, next))
}

/// Read indented command lines from `start`, joining `\` continuations
fn read_body(lines: &[&str], start: usize) -> (Vec<String>, usize) {
    let mut commands = Vec::new();
    let mut pending: Option<String> = None;
    let mut cursor = start;

    while let Some(line) = lines.get(cursor) {
        if line.trim().is_empty() {
            break;
        }
        // A continued line counts as body even without indentation
        if pending.is_none() && !is_indented(line) {
            break;
        }

        let body = line.trim_start();
        let mut joined = pending.take().unwrap_or_default();
        match body.trim_end().strip_suffix('\\') {
            Some(head) => {
                joined.push_str(head);
                pending = Some(joined);
            }
            None => {
                joined.push_str(body.trim_end());
                commands.push(joined);
            }
        }
        cursor += 1;
    }

    if let Some(rest) = pending {
        commands.push(rest.trim_end().to_string());
    }

    (commands, cursor)
}

/// Join logical command lines into one shell command line
///
/// Lines are separated by `; ` unless the previous line already ends in a
/// shell operator (`&`, `;`, `|`), where a second `;` would be a syntax error.
fn join_commands(commands: &[String]) -> String {
    let mut joined = String::new();
    for command in commands {
        if !joined.is_empty() {
            if joined.ends_with(['&', ';', '|']) {
                joined.push(' ');
            } else {
                joined.push_str("; ");
            }
        }
        joined.push_str(command);
    }
    joined
}

fn is_keystroke_line(line: &str) -> bool {
    !line.trim().is_empty() && !is_indented(line) && !line.starts_with('#')
}

fn is_indented(line: &str) -> bool {
    line.starts_with(|c: char| c == ' ' || c == '\t')
}
