//! Keychain classification: the text between one `{` and `}`
//!
//! A chain is one of:
//! - numeric range `{1-9}`
//! - alphabetic range `{a-f}`
//! - comma list `{h,j,k,l}` (items may themselves be ranges)
//! - wildcard `{_}`
//! - anything else, kept as a literal

/// Chain member meaning "no key here"
pub const WILDCARD: &str = "_";

/// A classified keychain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chain {
    NumericRange { start: u64, end: u64 },
    AlphaRange { start: char, end: char },
    List(Vec<Chain>),
    Wildcard,
    Literal(String),
}

impl Chain {
    /// Classify the content of one bracket group
    ///
    /// Never fails: unrecognised content becomes `Chain::Literal`.
    pub fn classify(content: &str) -> Self {
        if let Some(range) = parse_range(content.trim()) {
            return range;
        }

        if content.contains(',') {
            return Chain::List(content.split(',').map(classify_item).collect());
        }

        if content.trim() == WILDCARD {
            return Chain::Wildcard;
        }

        Chain::Literal(content.to_string())
    }

    /// Ordered substitution tokens. Never empty.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Chain::NumericRange { start, end } => {
                if start <= end {
                    (*start..=*end).map(|n| n.to_string()).collect()
                } else {
                    (*end..=*start).rev().map(|n| n.to_string()).collect()
                }
            }
            Chain::AlphaRange { start, end } => {
                if start <= end {
                    (*start..=*end).map(String::from).collect()
                } else {
                    (*end..=*start).rev().map(String::from).collect()
                }
            }
            Chain::Wildcard => vec![String::new()],
            Chain::Literal(text) => vec![text.clone()],
            Chain::List(items) => list_tokens(items),
        }
    }

    /// Number of tokens [`tokens`](Self::tokens) would produce, without producing them
    ///
    /// Exact except for lists mixing ranges and members, where members a range
    /// already covers are still counted.
    pub fn token_count(&self) -> u64 {
        match self {
            Chain::NumericRange { start, end } => start.abs_diff(*end).saturating_add(1),
            Chain::AlphaRange { start, end } => {
                u64::from((*start as u32).abs_diff(*end as u32)) + 1
            }
            Chain::List(items) => items
                .iter()
                .fold(0u64, |total, item| total.saturating_add(item.token_count())),
            Chain::Wildcard | Chain::Literal(_) => 1,
        }
    }

    /// True for numeric and alphabetic ranges
    pub fn is_range(&self) -> bool {
        matches!(self, Chain::NumericRange { .. } | Chain::AlphaRange { .. })
    }

    /// True when the group was not recognised as a chain at all
    pub fn is_literal(&self) -> bool {
        matches!(self, Chain::Literal(_))
    }
}

/// Classify one comma list member (already split, not yet trimmed)
fn classify_item(item: &str) -> Chain {
    let item = item.trim();
    if let Some(range) = parse_range(item) {
        range
    } else if item == WILDCARD {
        Chain::Wildcard
    } else {
        Chain::Literal(item.to_string())
    }
}

/// Ranges come first; plain members follow, minus anything a range already produced.
fn list_tokens(items: &[Chain]) -> Vec<String> {
    let (ranges, members): (Vec<&Chain>, Vec<&Chain>) = items.iter().partition(|c| c.is_range());

    if ranges.is_empty() {
        return members.iter().flat_map(|c| c.tokens()).collect();
    }

    let mut tokens: Vec<String> = ranges.iter().flat_map(|c| c.tokens()).collect();
    let range_len = tokens.len();

    for token in members.iter().flat_map(|c| c.tokens()) {
        if !tokens[..range_len].contains(&token) {
            tokens.push(token);
        }
    }

    tokens
}

/// `1-9` or `a-f`, already trimmed. Whitespace around the `-` makes it text,
/// so `0 -20` stays a single literal member.
fn parse_range(content: &str) -> Option<Chain> {
    let (start, end) = content.split_once('-')?;

    if is_number(start) && is_number(end) {
        return Some(Chain::NumericRange {
            start: start.parse().ok()?,
            end: end.parse().ok()?,
        });
    }

    match (single_lowercase(start), single_lowercase(end)) {
        (Some(start), Some(end)) => Some(Chain::AlphaRange { start, end }),
        _ => None,
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn single_lowercase(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Some(c),
        _ => None,
    }
}
