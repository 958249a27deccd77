use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use hl_mechanics::modifier;

use crate::locale::localize;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Modifier", "Position", "Effect", "Hint"]);

    for m in modifier::catalog() {
        let hints: Vec<&str> = m
            .hints()
            .into_iter()
            .map(|h| localize(h.label_key()))
            .collect();
        table.add_row(vec![
            m.key.clone(),
            localize(&m.label).to_string(),
            signed(m.position_shift),
            signed(m.effect_shift),
            hints.join(", "),
        ]);
    }

    println!("  {}", "Situational Modifiers".bold().underline());
    println!("{table}");
    println!(
        "  {}",
        "Modifiers are shown on the card; adjust position and effect yourself.".dimmed()
    );
    Ok(())
}

fn signed(shift: i8) -> String {
    match shift {
        0 => String::new(),
        s if s > 0 => format!("+{s}"),
        s => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_shifts() {
        assert_eq!(signed(0), "");
        assert_eq!(signed(1), "+1");
        assert_eq!(signed(-1), "-1");
    }
}
