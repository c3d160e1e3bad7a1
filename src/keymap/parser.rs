//! Document-level parsing: raw sxhkdrc text to expanded keybinds

use std::path::Path;

use super::block::extract_blocks;
use super::category::CategoryIndex;
use super::expand::MAX_EXPANSION;
use super::keybind::{assemble, Keybinds};
use crate::config::ParserConfig;
use crate::util::{read_config_file, FileOpenError};

/// Parses sxhkdrc text with a fixed set of prefixes
#[derive(Debug, Clone, Default)]
pub struct KeybindParser {
    config: ParserConfig,
}

impl KeybindParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Expand every block in `text`, in document order
    ///
    /// Any malformed block aborts the whole parse.
    pub fn parse(&self, text: &str) -> Result<Keybinds, KeymapError> {
        let blocks = extract_blocks(text, &self.config);
        let categories = CategoryIndex::build(text, &self.config.category_descriptor);

        let mut binds = Vec::new();
        for block in &blocks {
            let category = categories.resolve(block.line);
            let expanded = assemble(block, category)?;
            tracing::trace!(
                line = block.line + 1,
                category,
                count = expanded.len(),
                "expanded block"
            );
            binds.extend(expanded);
        }

        tracing::debug!(
            "Parsed {} blocks under {} headers into {} keybinds",
            blocks.len(),
            categories.len(),
            binds.len()
        );
        Ok(Keybinds::new(binds))
    }
}

/// Parse with the default `# ` / `### ` prefixes
pub fn parse_keybinds(text: &str) -> Result<Keybinds, KeymapError> {
    KeybindParser::default().parse(text)
}

/// Read and parse an sxhkdrc file
pub fn load_keybinds_file(path: &Path, config: &ParserConfig) -> Result<Keybinds, KeymapError> {
    let text = read_config_file(path).map_err(|error| KeymapError::File {
        path: path.display().to_string(),
        error,
    })?;

    KeybindParser::new(config.clone()).parse(&text)
}

/// Errors that can occur when parsing a configuration
#[derive(Debug, Clone)]
pub enum KeymapError {
    /// The configuration file could not be read
    File { path: String, error: FileOpenError },
    /// A keychain expands to a single keybind, so nothing matches it up
    UnmatchedChain { line: usize, keystroke: String },
    /// A block expands to more keybinds than the parser will build
    TooManyKeybinds { line: usize, count: u64 },
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::File { path, error } => write!(f, "{}", error.user_message(path)),
            KeymapError::UnmatchedChain { line, keystroke } => write!(
                f,
                "line {}: chain specified without matching expansion in '{}'. Fix your sxhkdrc",
                line, keystroke
            ),
            KeymapError::TooManyKeybinds { line, count } => write!(
                f,
                "line {}: block expands to {} keybinds (limit {})",
                line, count, MAX_EXPANSION
            ),
        }
    }
}

impl std::error::Error for KeymapError {}
