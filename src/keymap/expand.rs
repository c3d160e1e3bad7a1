//! Line expansion: every combination of a line's keychains
//!
//! ```text
//! "super + {_,shift + }{1-3}"  →  super + 1, super + 2, super + 3,
//!                                 super + shift + 1, ...
//! ```

use super::chain::Chain;
use super::delimiter;

/// Which line of a block is being expanded
///
/// Selects the delimiter policy: only keystrokes carry a modifier chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Description,
    Keystroke,
    Command,
}

/// One top-level `{...}` span, as byte offsets into its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    /// Offset of the `{`
    pub start: usize,
    /// Offset just past the `}`
    pub end: usize,
    /// Text between the braces
    pub content: &'a str,
}

/// Locate bracket groups left-to-right. An unclosed `{` is plain text.
pub fn find_groups(line: &str) -> Vec<Group<'_>> {
    let mut groups = Vec::new();
    let mut cursor = 0;

    while let Some(open) = line[cursor..].find('{').map(|i| cursor + i) {
        let Some(close) = line[open + 1..].find('}').map(|i| open + 1 + i) else {
            break;
        };
        groups.push(Group {
            start: open,
            end: close + 1,
            content: &line[open + 1..close],
        });
        cursor = close + 1;
    }

    groups
}

/// True if the line holds at least one group that classifies as a real chain
pub fn has_chain(line: &str) -> bool {
    find_groups(line)
        .iter()
        .any(|group| !Chain::classify(group.content).is_literal())
}

/// Most variants a single line may expand to
pub const MAX_EXPANSION: u64 = 10_000;

/// Number of variants [`expand_line`] would produce, saturating
pub fn expansion_size(line: &str) -> u64 {
    find_groups(line).iter().fold(1u64, |size, group| {
        size.saturating_mul(Chain::classify(group.content).token_count())
    })
}

/// Lexicographic product of token sequences, rightmost sequence varying fastest
///
/// Zero sequences yield a single empty tuple.
pub fn cartesian_product<T: AsRef<str>>(sequences: &[Vec<T>]) -> Vec<Vec<&str>> {
    sequences.iter().fold(vec![Vec::new()], |tuples, sequence| {
        tuples
            .iter()
            .flat_map(|prefix| {
                sequence.iter().map(move |token| {
                    let mut tuple = prefix.clone();
                    tuple.push(token.as_ref());
                    tuple
                })
            })
            .collect()
    })
}

/// Expand one line into its concrete variants, in product order
pub fn expand_line(line: &str, kind: LineKind) -> Vec<String> {
    let groups = find_groups(line);
    if groups.is_empty() {
        return vec![delimiter::normalize(line, kind)];
    }

    let sequences: Vec<Vec<String>> = groups
        .iter()
        .map(|group| Chain::classify(group.content).tokens())
        .collect();

    cartesian_product(&sequences)
        .into_iter()
        .map(|tuple| delimiter::substitute(line, &groups, &tuple, kind))
        .collect()
}
