pub mod config;
pub mod hints;
pub mod log;
pub mod modifiers;
pub mod push;
pub mod threat;

use std::path::Path;

use hl_mechanics::{DieSource, RngDice, ScriptedDice};

use crate::chat::ChatLog;
use crate::error::CliResult;
use crate::settings::Settings;

/// Largest dice pool a roll may use.
pub const MAX_POOL: i64 = 10;

/// Most additional threats a threat roll may carry.
pub const MAX_THREATS: i64 = 5;

/// Dice and output options shared by the roll commands.
pub struct RollOptions {
    pub seed: Option<u64>,
    pub faces: Vec<u32>,
    pub json: bool,
}

impl RollOptions {
    /// Scripted faces first, then an explicit seed, then the settings seed,
    /// then OS entropy.
    fn die_source(&self, settings: &Settings) -> Box<dyn DieSource> {
        if !self.faces.is_empty() {
            tracing::debug!(faces = ?self.faces, "using scripted dice");
            return Box::new(ScriptedDice::new(self.faces.iter().copied()));
        }
        match self.seed.or(settings.seed) {
            Some(seed) => {
                tracing::debug!(seed, "using seeded dice");
                Box::new(RngDice::seeded(seed))
            }
            None => Box::new(RngDice::from_entropy()),
        }
    }
}

/// Load settings and the chat log they point at.
fn open(config: &Path) -> CliResult<(Settings, ChatLog)> {
    let settings = Settings::load(config)?;
    let log = ChatLog::load(&settings.chat_log_path(config))?;
    Ok((settings, log))
}
