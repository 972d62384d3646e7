use std::path::Path;

use colored::Colorize;
use cq_core::WorldGraph;

pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(Some(path))?;

    println!("  Loaded '{}' successfully.", world.title);
    println!();
    println!(
        "  {} rooms, {} exits",
        world.room_count(),
        world.exit_count()
    );

    let warnings = warnings(&world);
    for warning in &warnings {
        println!("  {} {warning}", "warning:".yellow());
    }
    if !warnings.is_empty() {
        println!(
            "  {} warning{}",
            warnings.len(),
            if warnings.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// Things that load fine but are probably mistakes.
fn warnings(world: &WorldGraph) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(start) = world.start() {
        let reachable = world.reachable_from(start);
        for room in world.rooms().filter(|r| !reachable.contains(&r.id())) {
            out.push(format!(
                "room \"{}\" cannot be reached from the start room",
                room.name()
            ));
        }
    }

    for room in world.rooms().filter(|r| r.occupants().len() > 1) {
        out.push(format!(
            "room \"{}\" has {} occupants; only the first can be talked to",
            room.name(),
            room.occupants().len()
        ));
    }

    let gifts: Vec<&str> = world
        .rooms()
        .filter_map(|r| r.primary_occupant())
        .filter_map(|c| c.gift())
        .collect();
    let items = &world.quest_items;
    for (role, label) in [
        ("queen", &items.queen),
        ("dragon", &items.dragon),
        ("knight", &items.knight),
        ("cook", &items.cook),
        ("princess", &items.princess),
    ] {
        if !gifts.contains(&label.as_str()) {
            out.push(format!(
                "quest item for {role} (\"{label}\") is not offered by anyone"
            ));
        }
    }

    out
}
