use std::io::{self, Write};

use anyhow::{Context, Result};

use sxhkhm::cli::{CliArgs, OutputMode};
use sxhkhm::config::HelperConfig;
use sxhkhm::exec::{run_matching, SystemShell};
use sxhkhm::keymap::KeybindParser;
use sxhkhm::render;
use sxhkhm::util::read_config_file;

fn main() -> Result<()> {
    sxhkhm::tracing::init();

    let args = CliArgs::parse_args();
    let defaults = HelperConfig::load();
    let config = args.into_config(&defaults).map_err(anyhow::Error::msg)?;

    tracing::debug!(file = %config.file.display(), mode = ?config.mode, "starting");

    let text = read_config_file(&config.file)
        .map_err(|e| anyhow::anyhow!(e.user_message(&config.file.display().to_string())))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.mode == OutputMode::Raw {
        render::write_raw(&config.file, &text, &mut out)?;
        return Ok(());
    }

    let keybinds = KeybindParser::new(config.parser.clone())
        .parse(&text)
        .with_context(|| format!("Failed to parse {}", config.file.display()))?;

    match &config.mode {
        OutputMode::Exec(keystroke) => {
            run_matching(&keybinds, keystroke, &SystemShell)?;
        }
        OutputMode::Markdown => render::write_markdown(&keybinds, &mut out)?,
        OutputMode::Table => render::write_table(&keybinds, &mut out)?,
        OutputMode::Raw => {}
    }

    out.flush()?;
    Ok(())
}
