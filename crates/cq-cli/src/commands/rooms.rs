use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Occupant", "Gift", "Exits"]);

    for room in world.rooms() {
        let occupant = room.primary_occupant();
        let exits = world
            .linked_directions(room.id())
            .into_iter()
            .map(|(dir, to)| format!("{dir}: {to}"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut name = room.name().to_string();
        if world.start() == Some(room.id()) {
            name.push_str(" (start)");
        }

        table.add_row(vec![
            name,
            occupant.map_or("-".to_string(), |c| c.name().to_string()),
            occupant
                .and_then(|c| c.gift())
                .unwrap_or("-")
                .to_string(),
            exits,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", world.room_count());

    Ok(())
}
