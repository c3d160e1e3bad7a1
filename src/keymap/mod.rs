//! sxhkd keychain expansion
//!
//! This module turns sxhkdrc text into a flat table of keybinds:
//! - Finds description/keystroke/command blocks
//! - Resolves each block's category from the nearest header above it
//! - Expands `{...}` keychains (ranges, lists, wildcards) into every combination
//! - Re-synchronizes the expanded lines of a block by position
//!
//! # Architecture
//!
//! ```text
//! text → extract_blocks() → Block ─┬→ CategoryIndex::resolve() ─┐
//!                                  └→ expand_line() ×3 ──────────┴→ assemble() → Keybinds
//! ```
//!
//! # Parsing
//!
//! ```ignore
//! // Default `# ` / `### ` prefixes
//! let keybinds = parse_keybinds(&text)?;
//!
//! // Or from a file with custom prefixes
//! let keybinds = load_keybinds_file(path, &ParserConfig::new("## ", "#### "))?;
//! ```

mod block;
mod category;
mod chain;
mod delimiter;
mod expand;
mod keybind;
mod parser;

pub use block::{extract_blocks, Block};
pub use category::{normalize_label, resolve_category, CategoryIndex, MISC_CATEGORY};
pub use chain::{Chain, WILDCARD};
pub use delimiter::{delimiter_for, normalize, placement, Delimiter, Placement, SEPARATOR};
pub use expand::{
    cartesian_product, expand_line, expansion_size, find_groups, has_chain, Group, LineKind,
    MAX_EXPANSION,
};
pub use keybind::{assemble, pad_to, zip_positional, ExpandedKeybind, Keybinds};
pub use parser::{load_keybinds_file, parse_keybinds, KeybindParser, KeymapError};

#[cfg(test)]
mod tests;
