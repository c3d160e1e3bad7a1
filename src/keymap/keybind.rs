//! Keybind assembly: expand a block's three lines and zip them by position

use serde::Serialize;

use super::block::Block;
use super::expand::{expand_line, expansion_size, has_chain, LineKind, MAX_EXPANSION};
use super::parser::KeymapError;

/// One concrete keybind after expansion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ExpandedKeybind {
    pub category: String,
    pub description: String,
    pub keystroke: String,
    pub command: String,
}

/// Extend `lines` to `len` by repeating its first element
pub fn pad_to(mut lines: Vec<String>, len: usize) -> Vec<String> {
    if let Some(first) = lines.first().cloned() {
        lines.resize(len.max(lines.len()), first);
    }
    lines
}

/// Zip three expansions positionally, padding shorter ones with their first entry
pub fn zip_positional(
    descriptions: Vec<String>,
    keystrokes: Vec<String>,
    commands: Vec<String>,
) -> Vec<(String, String, String)> {
    let len = descriptions.len().max(keystrokes.len()).max(commands.len());

    pad_to(descriptions, len)
        .into_iter()
        .zip(pad_to(keystrokes, len))
        .zip(pad_to(commands, len))
        .map(|((description, keystroke), command)| (description, keystroke, command))
        .collect()
}

/// Expand one block into its keybinds, tagged with `category`
///
/// Fails when the keystroke or command holds a chain but the block
/// expands to fewer than two keybinds, or when any line would expand past
/// [`MAX_EXPANSION`] variants.
pub fn assemble(block: &Block, category: &str) -> Result<Vec<ExpandedKeybind>, KeymapError> {
    for text in [&block.description, &block.keystroke, &block.command] {
        let count = expansion_size(text);
        if count > MAX_EXPANSION {
            return Err(KeymapError::TooManyKeybinds {
                line: block.line + 1,
                count,
            });
        }
    }

    let descriptions = expand_line(&block.description, LineKind::Description);
    let keystrokes = expand_line(&block.keystroke, LineKind::Keystroke);
    let commands = expand_line(&block.command, LineKind::Command);

    let rows = zip_positional(descriptions, keystrokes, commands);

    let chained = has_chain(&block.keystroke) || has_chain(&block.command);
    if chained && rows.len() < 2 {
        return Err(KeymapError::UnmatchedChain {
            line: block.line + 1,
            keystroke: block.keystroke.clone(),
        });
    }

    Ok(rows
        .into_iter()
        .map(|(description, keystroke, command)| ExpandedKeybind {
            category: category.to_string(),
            description,
            keystroke,
            command,
        })
        .collect())
}

/// Ordered collection of expanded keybinds for a whole document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keybinds {
    binds: Vec<ExpandedKeybind>,
}

impl Keybinds {
    pub fn new(binds: Vec<ExpandedKeybind>) -> Self {
        Self { binds }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpandedKeybind> {
        self.binds.iter()
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }

    pub fn as_slice(&self) -> &[ExpandedKeybind] {
        &self.binds
    }

    /// Unique category labels in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for bind in &self.binds {
            if !seen.contains(&bind.category.as_str()) {
                seen.push(&bind.category);
            }
        }
        seen
    }

    /// Keybinds belonging to `category`, in document order
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ExpandedKeybind> + 'a {
        self.binds.iter().filter(move |b| b.category == category)
    }

    /// Keybinds whose keystroke is exactly `keystroke`
    pub fn matching<'a>(
        &'a self,
        keystroke: &'a str,
    ) -> impl Iterator<Item = &'a ExpandedKeybind> + 'a {
        self.binds.iter().filter(move |b| b.keystroke == keystroke)
    }
}

impl<'a> IntoIterator for &'a Keybinds {
    type Item = &'a ExpandedKeybind;
    type IntoIter = std::slice::Iter<'a, ExpandedKeybind>;

    fn into_iter(self) -> Self::IntoIter {
        self.binds.iter()
    }
}

impl From<Vec<ExpandedKeybind>> for Keybinds {
    fn from(binds: Vec<ExpandedKeybind>) -> Self {
        Self::new(binds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(description: &str, keystroke: &str, command: &str) -> Block {
        Block {
            line: 0,
            description: description.to_string(),
            keystroke: keystroke.to_string(),
            command: command.to_string(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pad_repeats_first_element() {
        assert_eq!(pad_to(strings(&["a", "b"]), 4), strings(&["a", "b", "a", "a"]));
        assert_eq!(pad_to(strings(&["a"]), 1), strings(&["a"]));
        assert!(pad_to(Vec::new(), 3).is_empty());
    }

    #[test]
    fn test_zip_pairs_by_position() {
        let rows = zip_positional(
            strings(&["up", "down"]),
            strings(&["Raise", "Lower"]),
            strings(&["+", "-"]),
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ("down".into(), "Lower".into(), "-".into()));
    }

    #[test]
    fn test_chainless_command_repeats_for_every_keystroke() {
        let binds = assemble(&block("Focus", "super + {h,j,k,l}", "bspc node -f last"), "misc")
            .unwrap();
        assert_eq!(binds.len(), 4);
        assert!(binds.iter().all(|b| b.command == "bspc node -f last"));
        assert!(binds.iter().all(|b| b.description == "Focus"));
        assert_eq!(binds[3].keystroke, "super + l");
    }

    #[test]
    fn test_shorter_chain_pads_with_first_value() {
        let binds = assemble(&block("x", "super + {a,b,c}", "echo {1,2}"), "misc").unwrap();
        let commands: Vec<&str> = binds.iter().map(|b| b.command.as_str()).collect();
        assert_eq!(commands, vec!["echo 1", "echo 2", "echo 1"]);
    }

    #[test]
    fn test_single_position_chain_is_an_error() {
        let err = assemble(&block("x", "super + {_}", "echo"), "misc").unwrap_err();
        assert!(matches!(err, KeymapError::UnmatchedChain { line: 1, .. }));
    }

    #[test]
    fn test_oversized_range_is_an_error() {
        let err = assemble(&block("x", "super + {1-4000000000}", "echo"), "misc").unwrap_err();
        assert!(matches!(
            err,
            KeymapError::TooManyKeybinds {
                line: 1,
                count: 4_000_000_000
            }
        ));
    }

    #[test]
    fn test_oversized_product_is_an_error() {
        let wide = block("x", "super + {a-z}", "echo {1-101}{1-100}");
        let err = assemble(&wide, "misc").unwrap_err();
        assert!(matches!(
            err,
            KeymapError::TooManyKeybinds { count: 10_100, .. }
        ));
    }

    #[test]
    fn test_literal_braces_are_not_an_error() {
        let binds = assemble(&block("home", "super + h", "cd ${HOME}"), "misc").unwrap();
        assert_eq!(binds[0].command, "cd $HOME");
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let bind = |category: &str, keystroke: &str| ExpandedKeybind {
            category: category.to_string(),
            description: String::new(),
            keystroke: keystroke.to_string(),
            command: String::new(),
        };
        let binds = Keybinds::new(vec![
            bind("b", "x"),
            bind("a", "y"),
            bind("b", "z"),
        ]);
        assert_eq!(binds.categories(), vec!["b", "a"]);
        assert_eq!(binds.in_category("b").count(), 2);
        assert_eq!(binds.matching("y").count(), 1);
        assert_eq!(binds.matching("super + y").count(), 0);
    }
}
