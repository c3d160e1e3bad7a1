//! sxhkhm - hotkey helper for sxhkd
//!
//! This crate parses an sxhkd configuration into a fully expanded keybind
//! table, and renders or executes the result.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod exec;
pub mod keymap;
pub mod render;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::{HelperConfig, ParserConfig};
pub use keymap::{parse_keybinds, ExpandedKeybind, KeybindParser, Keybinds, KeymapError};
