//! Delimiter reconciliation at keychain substitution sites
//!
//! Substituting `shift` into `super + {_,shift + }{1-9}` has to produce
//! `super + shift + 1`, and substituting the wildcard has to produce
//! `super + 1` rather than `super +  + 1`. Each site is classified by its
//! [`Placement`] in the source line, then [`delimiter_for`] picks what to emit.

use super::expand::{Group, LineKind};

/// Separator between modifiers and keys in a keystroke
pub const SEPARATOR: &str = " + ";

/// Characters that already separate keystroke parts (`+`, chord `;`, `:`)
const SEPARATOR_CHARS: &[char] = &['+', ';', ':'];

/// Where a group sits in its source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The group is the whole line
    Whole,
    /// Touching word characters, e.g. `XF86Audio{Raise,Lower}Volume`
    Glued,
    /// More keys follow with no separator in between
    Chained,
    /// More keys follow, but a separator is already written
    Separated,
    /// Nothing follows
    Trailing,
}

/// What to emit at a substitution site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// The token alone
    Bare,
    /// The token followed by [`SEPARATOR`]
    Joined,
    /// Nothing, and the separator after the group is swallowed as well
    Dropped,
}

/// Classify a group's position within `line`
pub fn placement(line: &str, group: &Group<'_>) -> Placement {
    let before = &line[..group.start];
    let after = &line[group.end..];

    if before.trim().is_empty() && after.trim().is_empty() {
        return Placement::Whole;
    }

    let glued_before = before.chars().next_back().is_some_and(is_word_char);
    let glued_after = after.chars().next().is_some_and(is_word_char);
    if glued_before || glued_after {
        return Placement::Glued;
    }

    let rest = after.trim_start();
    if rest.is_empty() {
        Placement::Trailing
    } else if rest.starts_with(SEPARATOR_CHARS) {
        Placement::Separated
    } else {
        Placement::Chained
    }
}

/// Keystroke delimiter policy. First matching arm wins.
pub fn delimiter_for(placement: Placement, token: &str) -> Delimiter {
    match (placement, token.is_empty()) {
        (Placement::Whole, _) => Delimiter::Bare,
        (_, true) => Delimiter::Dropped,
        (Placement::Glued, false) => Delimiter::Bare,
        (Placement::Chained, false) => Delimiter::Joined,
        (Placement::Separated | Placement::Trailing, false) => Delimiter::Bare,
    }
}

/// Substitute one token per group (left to right), reconcile, then normalize
///
/// `tokens` must have one entry per group.
pub fn substitute(line: &str, groups: &[Group<'_>], tokens: &[&str], kind: LineKind) -> String {
    let mut out = String::with_capacity(line.len());
    let mut cursor = 0;

    for (group, token) in groups.iter().zip(tokens) {
        // A previous dropped group may have swallowed text up to here
        if cursor < group.start {
            out.push_str(&line[cursor..group.start]);
        }
        cursor = group.end;

        if kind != LineKind::Keystroke {
            out.push_str(token);
            continue;
        }

        match delimiter_for(placement(line, group), token) {
            Delimiter::Bare => out.push_str(token),
            Delimiter::Joined => {
                out.push_str(token);
                out.push_str(SEPARATOR);
            }
            Delimiter::Dropped => cursor += following_separator_len(&line[group.end..]),
        }
    }

    out.push_str(&line[cursor.min(line.len())..]);
    normalize(&out, kind)
}

/// Length of a `+` separator (with surrounding whitespace) at the start of `text`, or 0
fn following_separator_len(text: &str) -> usize {
    let trimmed = text.trim_start();
    match trimmed.strip_prefix('+') {
        Some(rest) => text.len() - rest.trim_start().len(),
        None => 0,
    }
}

/// Whitespace and separator cleanup. Idempotent.
///
/// All lines: runs of two or more whitespace characters become one space, ends trimmed.
/// Keystrokes also collapse doubled `+` separators and drop dangling ones.
pub fn normalize(line: &str, kind: LineKind) -> String {
    let collapsed = collapse_whitespace(line);

    if kind != LineKind::Keystroke {
        return collapsed;
    }

    collapsed
        .split('+')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn collapse_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.trim().chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() && chars.peek().is_some_and(|next| next.is_whitespace()) {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(ch);
        }
    }

    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
