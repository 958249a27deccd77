use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::Table;

use crate::settings::Settings;

/// Apply any requested changes, save if something changed, then print the
/// settings. `seed` is `Some(None)` to clear the default seed.
pub fn run(
    config: &Path,
    enable_threat_rolls: Option<bool>,
    seed: Option<Option<u64>>,
    chat_log: Option<PathBuf>,
) -> Result<(), String> {
    let mut settings = Settings::load(config).map_err(|e| e.to_string())?;
    let changed = enable_threat_rolls.is_some() || seed.is_some() || chat_log.is_some();

    if let Some(enabled) = enable_threat_rolls {
        settings = settings.with_threat_rolls(enabled);
    }
    if let Some(seed) = seed {
        settings = settings.with_seed(seed);
    }
    if let Some(path) = chat_log {
        settings = settings.with_chat_log(path);
    }

    if changed {
        settings.save(config).map_err(|e| e.to_string())?;
        println!("  {} {}", "Saved".green().bold(), config.display());
    }

    let mut table = Table::new();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec![
        "enableThreatRolls".to_string(),
        settings.enable_threat_rolls.to_string(),
    ]);
    table.add_row(vec![
        "chatLog".to_string(),
        settings.chat_log_path(config).display().to_string(),
    ]);
    table.add_row(vec![
        "seed".to_string(),
        settings
            .seed
            .map_or_else(|| "(random)".to_string(), |s| s.to_string()),
    ]);
    println!("{table}");
    Ok(())
}
