use comfy_table::{ContentArrangement, Table};

use tj_deck::Category;

use super::Globals;

pub fn run(globals: &Globals) -> Result<(), String> {
    let catalog = super::deck::load_profiles(globals)?;

    if globals.json {
        return super::print_json(&catalog.profiles());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Sky", "Earth", "Human", "Variable", "Keywords"]);
    for profile in catalog.profiles() {
        let mut row = vec![profile.id.clone(), profile.name.clone()];
        let weights = profile.normalized_weights();
        row.extend(
            Category::all()
                .iter()
                .map(|&c| format!("{:.0}%", weights[c] * 100.0)),
        );
        row.push(profile.keywords.join(", "));
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}
