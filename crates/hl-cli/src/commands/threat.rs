use std::path::Path;

use colored::Colorize;
use hl_mechanics::{EffectLevel, Position, ThreatRollParams, modifier, roll_threat};

use super::RollOptions;
use crate::error::{CliError, CliResult};
use crate::render;

/// What the user asked to roll.
pub struct ThreatRequest {
    pub dice: i32,
    pub position: Position,
    pub threats: i32,
    pub effect: EffectLevel,
    pub modifiers: Vec<String>,
    pub note: String,
    pub speaker: Option<String>,
}

pub fn run(config: &Path, request: ThreatRequest, options: &RollOptions) -> Result<(), String> {
    roll(config, request, options).map_err(|e| e.to_string())
}

fn roll(config: &Path, request: ThreatRequest, options: &RollOptions) -> CliResult<()> {
    let (settings, mut log) = super::open(config)?;
    if !settings.enable_threat_rolls {
        return Err(CliError::ThreatRollsDisabled);
    }

    let modifiers = modifier::select(request.modifiers.iter().map(String::as_str))?;
    let params = ThreatRollParams::new(request.dice, request.position)
        .with_additional_threats(request.threats)
        .with_effect(request.effect)
        .with_note(request.note)
        .with_modifiers(modifiers);

    let mut dice = options.die_source(&settings);
    let result = roll_threat(params, dice.as_mut())?;

    let message = log.post_threat(result, request.speaker);
    if options.json {
        println!("{}", render::json(message)?);
    } else {
        print!("{}", render::message(message));
        let hint = format!(
            "Push against a risk with: hl push --message {} --risk N",
            message.short_id()
        );
        println!("  {}", hint.dimmed());
    }
    log.save()
}
