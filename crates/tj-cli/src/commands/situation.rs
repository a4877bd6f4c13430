use colored::Colorize;

use tj_draw::ScoringMode;

use super::Globals;

pub fn run(
    globals: &Globals,
    profile: &str,
    count: Option<usize>,
    scoring: Option<&str>,
) -> Result<(), String> {
    let mut config = globals.config();
    if let Some(s) = scoring {
        let mode = ScoringMode::parse(s).ok_or_else(|| {
            format!("unknown scoring mode '{s}' (expected keyword, attribute-fit or blended)")
        })?;
        config = config.with_scoring_mode(mode);
    }
    let mut session = super::open_session_with(globals, config)?;
    let outcome = session
        .draw_situation(profile, count)
        .map_err(|e| e.to_string())?;

    if globals.json {
        return super::print_json(&outcome);
    }

    let name = session
        .profiles()
        .get(profile)
        .map(|p| p.name.clone())
        .unwrap_or_else(|_| profile.to_string());
    let summary = &outcome.summary;
    println!(
        "  {} {}  {}",
        name.bold(),
        format!("({} cards)", outcome.cards.len()).dimmed(),
        summary.overall.to_string().cyan()
    );
    println!(
        "  Energy: {}  Risk: {}  Opportunity: {}",
        summary.energy, summary.risk, summary.opportunity
    );
    println!();
    for (i, card) in outcome.cards.iter().enumerate() {
        println!("  {}. {}", i + 1, super::card_line(card));
    }
    println!();

    let reading = &outcome.reading;
    if !reading.patterns.is_empty() {
        let patterns: Vec<String> = reading.patterns.iter().map(|p| p.to_string()).collect();
        println!("  Patterns: {}", patterns.join(", ").yellow());
        println!();
    }
    println!("  {}", reading.opening.italic());
    println!();
    println!("  {}", reading.analysis);
    println!();
    println!("  {}", "Advice".bold().underline());
    for line in &reading.advice {
        println!("  - {line}");
    }
    if !reading.key_insights.is_empty() {
        println!();
        println!("  {}", "Key insights".bold().underline());
        for line in &reading.key_insights {
            println!("  * {line}");
        }
    }
    println!();
    println!("  {}", reading.closing.italic());
    Ok(())
}
