use colored::Colorize;

use super::Globals;

pub fn run(globals: &Globals, category: Option<&str>) -> Result<(), String> {
    let category = category.map(super::parse_category).transpose()?;
    let mut session = super::open_session(globals)?;
    let outcome = session.draw_single(category).map_err(|e| e.to_string())?;

    if globals.json {
        return super::print_json(&outcome);
    }

    let card = &outcome.card;
    println!("  {}", super::card_line(card));
    println!(
        "  {} energy {}  impact {}  direction {}  {}",
        card.intensity.to_string().dimmed(),
        card.energy,
        card.impact,
        super::direction_label(card.direction),
        card.horizon_label().dimmed()
    );
    println!();
    println!("  {}", outcome.reading.meaning);
    println!();
    println!("  {} {}", "Advice".bold(), outcome.reading.advice);
    println!("  {}", outcome.reading.context.dimmed());
    Ok(())
}
