use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use hl_mechanics::resolution::push::{ATTRIBUTE_HINTS, STRESS_TABLE, recommended_attribute};

use crate::locale::{self, localize};

pub fn run(consequence: Option<&str>) -> Result<(), String> {
    if let Some(consequence) = consequence {
        let attribute = recommended_attribute(consequence)
            .ok_or_else(|| format!("no recommendation for '{consequence}'"))?;
        println!(
            "  {} resists {}",
            locale::attribute(attribute).bold(),
            consequence
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Consequence", "Attribute"]);
    for (kind, attribute) in ATTRIBUTE_HINTS {
        table.add_row(vec![kind.replace('_', " "), locale::attribute(attribute)]);
    }
    println!("  {}", "Resisting Consequences".bold().underline());
    println!("{table}");
    println!();

    let mut stress = Table::new();
    stress.set_content_arrangement(ContentArrangement::Dynamic);
    stress.set_header(vec![
        localize("HIDDEN_LONDON.Push.Result"),
        localize("HIDDEN_LONDON.Push.StressCost"),
    ]);
    for (result, cost) in STRESS_TABLE {
        stress.add_row(vec![result.to_string(), cost.to_string()]);
    }
    println!("  {}", "Stress Cost".bold().underline());
    println!("{stress}");
    Ok(())
}
