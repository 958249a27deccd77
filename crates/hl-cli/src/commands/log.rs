use std::path::Path;

use colored::Colorize;

use crate::render;

pub fn run(config: &Path, limit: usize) -> Result<(), String> {
    let (_, log) = super::open(config).map_err(|e| e.to_string())?;

    if log.is_empty() {
        println!("  No messages yet.");
        return Ok(());
    }

    let recent = log.recent(limit);
    println!(
        "  {} {}",
        "Chat Log".bold().underline(),
        format!("(showing {} of {})", recent.len(), log.len()).dimmed()
    );
    for message in recent {
        println!();
        print!("{}", render::message(message));
    }
    Ok(())
}
