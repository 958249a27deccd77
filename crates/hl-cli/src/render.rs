//! Terminal rendering of roll cards.

use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};

use hl_mechanics::{PushRollResult, ThreatOutcome, ThreatRollResult};

use crate::chat::{ChatMessage, MessageBody};
use crate::error::{CliError, CliResult};
use crate::locale::{self, localize};

/// Render any posted message.
pub fn message(message: &ChatMessage) -> String {
    let mut out = String::new();
    let speaker = message.speaker.as_deref().unwrap_or("Someone");
    out.push_str(&format!(
        "  {} {} {}\n",
        message.short_id().dimmed(),
        speaker.bold(),
        message
            .posted_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .dimmed()
    ));
    match &message.body {
        MessageBody::Threat(result) => out.push_str(&threat_card(result, message)),
        MessageBody::Push(result) => out.push_str(&push_card(result)),
    }
    out
}

/// A posted message as pretty JSON.
pub fn json(message: &ChatMessage) -> CliResult<String> {
    serde_json::to_string_pretty(message).map_err(CliError::Output)
}

/// Render a threat roll card.
fn threat_card(result: &ThreatRollResult, message: &ChatMessage) -> String {
    let mut out = String::new();
    let primary = result
        .primary()
        .map_or(ThreatOutcome::Threat, |d| d.outcome);

    out.push_str(&format!(
        "  {}  {}\n",
        localize("HIDDEN_LONDON.ThreatRoll").bold().underline(),
        format!(
            "{} position, {} effect",
            locale::position(result.position),
            locale::effect(result.effect)
        )
        .dimmed()
    ));
    out.push_str(&format!(
        "  {}\n",
        paint(primary, &locale::outcome(primary).to_uppercase())
    ));
    out.push_str(&format!("  Dice: {}\n", dice_faces(&result.all_dice)));
    if result.zero_mode {
        out.push_str(&format!(
            "  {}\n",
            "Zero dice: rolled 2d6, the worse die counts".yellow()
        ));
    }
    if result.is_critical {
        out.push_str(&format!("  {}\n", "Two sixes: critical!".magenta().bold()));
    }
    out.push('\n');

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Risk", "Die", "Outcome", "Pushed"]);
    for die in &result.assigned_dice {
        let risk = if die.threat_index == 0 {
            "primary".to_string()
        } else {
            format!("#{}", die.threat_index)
        };
        let pushed = if message.pushed.contains(&die.threat_index) {
            "yes"
        } else {
            ""
        };
        table.add_row(vec![
            risk,
            die.value.to_string(),
            locale::outcome(die.outcome),
            pushed.to_string(),
        ]);
    }
    out.push_str(&format!("{table}\n"));

    if !result.unused_dice.is_empty() {
        let unused: Vec<String> = result.unused_dice.iter().map(|v| v.to_string()).collect();
        out.push_str(&format!("  Unused: {}\n", unused.join(", ").dimmed()));
    }
    if !result.modifiers.is_empty() {
        let mods: Vec<String> = result
            .modifiers
            .iter()
            .map(|m| {
                let hints: Vec<&str> = m
                    .hints()
                    .into_iter()
                    .map(|h| localize(h.label_key()))
                    .collect();
                if hints.is_empty() {
                    localize(&m.label).to_string()
                } else {
                    format!("{} ({})", localize(&m.label), hints.join(", "))
                }
            })
            .collect();
        out.push_str(&format!("  Modifiers: {}\n", mods.join("; ")));
    }
    if !result.note.is_empty() {
        out.push_str(&format!("  Note: {}\n", result.note.italic()));
    }
    if result.mark_xp {
        out.push_str(&format!("  {}\n", "Mark XP".cyan().bold()));
    }
    out
}

/// Render a Push Yourself card.
fn push_card(result: &PushRollResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {}  {}\n",
        localize("HIDDEN_LONDON.Push.PushYourself").bold().underline(),
        locale::attribute(result.attribute).dimmed()
    ));
    out.push_str(&format!("  Dice: {}\n", dice_faces(&result.all_dice)));
    if result.zero_mode {
        out.push_str(&format!(
            "  {}\n",
            "Zero dice: rolled 2d6, the worse die counts".yellow()
        ));
    }
    if result.is_critical {
        out.push_str(&format!("  {}\n", "Two sixes: critical!".magenta().bold()));
    }
    let stress = format!(
        "{}: {}",
        localize("HIDDEN_LONDON.Push.StressCost"),
        result.stress_cost
    );
    let stress = match result.stress_cost {
        0 => stress.green().bold(),
        1 => stress.green(),
        2 => stress.yellow(),
        _ => stress.red().bold(),
    };
    out.push_str(&format!("  {stress}\n"));
    out
}

fn dice_faces(dice: &[u8]) -> String {
    dice.iter()
        .map(|v| format!("[{v}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint(outcome: ThreatOutcome, text: &str) -> ColoredString {
    match outcome {
        ThreatOutcome::Critical => text.magenta().bold(),
        ThreatOutcome::Success => text.green().bold(),
        ThreatOutcome::Peril => text.yellow().bold(),
        ThreatOutcome::Threat => text.red().bold(),
    }
}
