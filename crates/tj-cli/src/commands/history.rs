use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tj_session::HistoryStore;

use super::Globals;

pub fn run(globals: &Globals, limit: usize, top: Option<usize>, clear: bool) -> Result<(), String> {
    if globals.history.is_none() {
        return Err("no history file given (use --history <path>)".into());
    }
    let mut session = super::open_session(globals)?;

    if clear {
        session.history_mut().clear().map_err(|e| e.to_string())?;
        println!("  History cleared.");
        return Ok(());
    }

    let store = session.history();
    let records: Vec<_> = store.records().iter().take(limit).collect();
    let frequent = top.map(|n| store.most_frequent(n));

    if globals.json {
        return super::print_json(&serde_json::json!({
            "records": records,
            "most_frequent": frequent,
        }));
    }

    if records.is_empty() {
        println!("  No draws recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["When", "Mode", "Cards", "Summary"]);
    for record in &records {
        table.add_row(vec![
            record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            match &record.profile_id {
                Some(p) => format!("{} ({p})", record.mode),
                None => record.mode.to_string(),
            },
            record.card_ids.join(" "),
            record.summary.clone(),
        ]);
    }
    println!("{table}");
    println!();
    println!(
        "  {} of {} draws",
        records.len(),
        store.records().len()
    );
    if let Some(mode) = store.last_mode() {
        println!("  Last mode: {}", mode.to_string().cyan());
    }

    if let Some(frequent) = frequent {
        println!();
        println!("  {}", "Most drawn".bold().underline());
        let deck = session.deck();
        for (id, count) in frequent {
            let name = deck.get(&id).map(|c| c.name.as_str()).unwrap_or("?");
            println!("  {count:>4}  {name} {}", format!("({id})").dimmed());
        }
    }
    Ok(())
}
