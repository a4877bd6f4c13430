use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::Globals;

pub fn run(globals: &Globals) -> Result<(), String> {
    let mut session = super::open_session(globals)?;
    let outcome = session.draw_fortune().map_err(|e| e.to_string())?;

    if globals.json {
        return super::print_json(&outcome);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Card", "Energy", "Impact", "Direction"]);
    for card in &outcome.cards {
        table.add_row(vec![
            card.category.to_string(),
            card.name.clone(),
            card.energy.to_string(),
            card.impact.to_string(),
            format!("{:+}", card.direction),
        ]);
    }
    println!("{table}");
    println!();

    let calc = &outcome.calculation;
    println!(
        "  {} {}  {}",
        "Fortune".bold(),
        super::level_label(calc.level),
        format!(
            "(score {:.1}, base {:.1}, interactions {:+.1})",
            calc.total_score, calc.base_score, calc.interaction_score
        )
        .dimmed()
    );
    println!("  Trend: {}  Horizon: {}", calc.trend, calc.horizon);
    let dims = &calc.dimensions;
    println!(
        "  Energy: {}  Environment: {}  Relationships: {}  Variable: {}",
        dims.energy_flow, dims.environment, dims.relationship, dims.variable_impact
    );
    if !calc.combinations.is_empty() {
        let tags: Vec<String> = calc.combinations.iter().map(|t| t.to_string()).collect();
        println!("  Combinations: {}", tags.join(", ").yellow());
    }
    if !calc.key_themes.is_empty() {
        println!("  Themes: {}", calc.key_themes.join(", "));
    }
    println!();

    let reading = &outcome.reading;
    println!("  {}", reading.opening.italic());
    println!();
    println!("  {}", reading.analysis);
    println!();
    println!("  {}", "Advice".bold().underline());
    for line in &reading.advice {
        println!("  - {line}");
    }
    println!();
    println!("  {}", reading.closing.italic());
    Ok(())
}
