//! Command-line argument parsing for the helper
//!
//! Supports:
//! - Printing the expanded keybind table (default)
//! - Printing a markdown cheatsheet
//! - Printing the raw configuration
//! - Executing the command bound to a keystroke
//!
//! Values resolve as: flag, then environment variable, then
//! `~/.config/sxhkhm/config.yaml`, then the built-in default.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{HelperConfig, ParserConfig, DEFAULT_CATEGORY_DESCRIPTOR, DEFAULT_DESCRIPTOR};

/// Hotkey helper - standalone sxhkd configuration parser and keystroke runner
#[derive(Parser, Debug, Default)]
#[command(
    name = "sxhkhm",
    version,
    about = "Hotkey helper - standalone sxhkd configuration parser and keystroke runner"
)]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "sxhkd_config", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Comment descriptor marking a keybind description
    #[arg(short = 'd', long, env = "descriptor", value_name = "PREFIX")]
    pub descriptor: Option<String>,

    /// Category descriptor marking a category header
    #[arg(
        short = 'c',
        long,
        alias = "category_descriptor",
        env = "category_descriptor",
        value_name = "PREFIX"
    )]
    pub category_descriptor: Option<String>,

    /// Execute command bound to passed keystroke
    #[arg(short = 'e', long, value_name = "KEYSTROKE")]
    pub exec: Option<String>,

    /// Print fully unpacked keybind table in markdown format (for cheatsheets)
    #[arg(short = 'm', long)]
    pub markdown: bool,

    /// Print raw configuration
    #[arg(short = 'r', long)]
    pub raw: bool,

    /// Print fully unpacked keybind table (default)
    #[arg(short = 'p', long)]
    pub print: bool,
}

/// What the run should do, in priority order exec > raw > markdown > print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Exec(String),
    Raw,
    Markdown,
    Table,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// sxhkd configuration file to read
    pub file: PathBuf,
    pub parser: ParserConfig,
    pub mode: OutputMode,
}

/// Two-letter short flag older releases used for `--category-descriptor`
const LEGACY_CATEGORY_FLAG: &str = "-cd";
const CATEGORY_FLAG: &str = "--category-descriptor";

/// Rewrite `-cd PREFIX` and `-cd=PREFIX` to the long form clap understands
pub fn rewrite_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(rewrite_legacy_flag)
        .collect()
}

fn rewrite_legacy_flag(arg: OsString) -> OsString {
    let replacement = match arg.to_str() {
        Some(LEGACY_CATEGORY_FLAG) => Some(CATEGORY_FLAG.to_string()),
        Some(text) => text
            .strip_prefix("-cd=")
            .map(|value| format!("{}={}", CATEGORY_FLAG, value)),
        None => None,
    };
    replacement.map(OsString::from).unwrap_or(arg)
}

impl CliArgs {
    /// Parse the process arguments, accepting legacy flag spellings
    pub fn parse_args() -> Self {
        Self::parse_from(rewrite_legacy_flags(std::env::args_os()))
    }

    /// Resolve parsed CLI args against persisted defaults
    pub fn into_config(self, defaults: &HelperConfig) -> Result<RunConfig, String> {
        let file = self
            .file
            .or_else(|| defaults.sxhkdrc.clone())
            .or_else(crate::config_paths::default_sxhkdrc)
            .ok_or_else(|| {
                "No configuration file given and no config directory available".to_string()
            })?;

        let descriptor = self
            .descriptor
            .or_else(|| defaults.descriptor.clone())
            .unwrap_or_else(|| DEFAULT_DESCRIPTOR.to_string());
        let category_descriptor = self
            .category_descriptor
            .or_else(|| defaults.category_descriptor.clone())
            .unwrap_or_else(|| DEFAULT_CATEGORY_DESCRIPTOR.to_string());

        if descriptor.is_empty() {
            return Err("Descriptor must not be empty".to_string());
        }
        if category_descriptor.is_empty() {
            return Err("Category descriptor must not be empty".to_string());
        }

        let mode = match self.exec {
            Some(keystroke) if !keystroke.is_empty() => OutputMode::Exec(keystroke),
            _ if self.raw => OutputMode::Raw,
            _ if self.markdown => OutputMode::Markdown,
            _ => OutputMode::Table,
        };

        Ok(RunConfig {
            file,
            parser: ParserConfig::new(descriptor, category_descriptor),
            mode,
        })
    }
}
