use std::path::{Path, PathBuf};

use colored::Colorize;
use hl_mechanics::{CharacterSheet, PoolLookup, PushAttribute, roll_push};

use super::{MAX_POOL, RollOptions};
use crate::error::{CliError, CliResult};
use crate::render;

/// What the user asked to roll.
pub struct PushRequest {
    pub attribute: PushAttribute,
    pub dice: Option<i32>,
    pub character: Option<PathBuf>,
    /// Message id and risk index being resisted.
    pub target: Option<(String, usize)>,
    pub speaker: Option<String>,
}

pub fn run(config: &Path, request: PushRequest, options: &RollOptions) -> Result<(), String> {
    roll(config, request, options).map_err(|e| e.to_string())
}

fn roll(config: &Path, request: PushRequest, options: &RollOptions) -> CliResult<()> {
    let (settings, mut log) = super::open(config)?;

    let (pool, sheet_name) = resolve_pool(&request)?;
    let speaker = request.speaker.or(sheet_name);

    // Refuse a second push before spending any dice on it.
    if let Some((id, risk)) = &request.target {
        log.get(id)?.check_pushable(*risk)?;
    }

    let mut dice = options.die_source(&settings);
    let result = roll_push(request.attribute, pool, dice.as_mut())?;

    if let Some((id, risk)) = &request.target {
        let pushed = log.mark_pushed(id, *risk)?;
        tracing::info!(message = %pushed, risk, "push recorded against threat roll");
    }

    let message = log.post_push(result, speaker);
    if options.json {
        println!("{}", render::json(message)?);
    } else {
        print!("{}", render::message(message));
        if let Some((id, risk)) = &request.target {
            println!("  {}", format!("Resisted risk #{risk} on {id}").dimmed());
        }
    }
    log.save()
}

/// The pool to roll and, when it came from a sheet, the character's name.
fn resolve_pool(request: &PushRequest) -> CliResult<(i32, Option<String>)> {
    if let Some(dice) = request.dice {
        return Ok((dice, None));
    }
    let path = request.character.as_deref().ok_or(CliError::MissingPool)?;
    let sheet = CharacterSheet::load(path)?;
    let pool = sheet.dice_pool(request.attribute)?.unwrap_or(0);
    tracing::debug!(
        character = %sheet.name,
        attribute = %request.attribute,
        pool,
        "pool from sheet"
    );
    let dice = i32::try_from(pool)
        .ok()
        .filter(|&dice| i64::from(dice) <= MAX_POOL)
        .ok_or(CliError::PoolTooLarge {
            pool,
            max: MAX_POOL,
        })?;
    Ok((dice, Some(sheet.name)))
}
