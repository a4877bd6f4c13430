use comfy_table::{ContentArrangement, Table};

use tj_deck::{Deck, ProfileCatalog};

use super::Globals;

fn load_deck(globals: &Globals) -> Result<Deck, String> {
    let deck = match &globals.deck {
        Some(path) => Deck::from_path(path),
        None => Deck::builtin(),
    };
    deck.map_err(|e| e.to_string())
}

pub fn run(globals: &Globals, category: Option<&str>) -> Result<(), String> {
    let category = category.map(super::parse_category).transpose()?;
    let deck = load_deck(globals)?;
    let cards: Vec<_> = match category {
        Some(c) => deck.in_category(c),
        None => deck.cards().iter().collect(),
    };

    if globals.json {
        return super::print_json(&cards);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Id", "Name", "Category", "Energy", "Impact", "Dir", "Horizon", "Intensity", "Keywords",
    ]);
    for card in &cards {
        table.add_row(vec![
            card.id.clone(),
            card.name.clone(),
            card.category.to_string(),
            card.energy.to_string(),
            card.impact.to_string(),
            super::direction_label(card.direction).to_string(),
            card.horizon_label().to_string(),
            card.intensity.to_string(),
            card.keywords.join(", "),
        ]);
    }
    println!("{table}");
    println!();
    println!("  {} cards", cards.len());
    Ok(())
}

/// Load the profile catalog named by the global flags.
pub fn load_profiles(globals: &Globals) -> Result<ProfileCatalog, String> {
    let catalog = match &globals.profiles {
        Some(path) => ProfileCatalog::from_path(path),
        None => ProfileCatalog::builtin(),
    };
    catalog.map_err(|e| e.to_string())
}
