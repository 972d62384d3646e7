use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use cq_fiction::{GameConfig, GameSession, Notice, OutputEvent, suggest_command};

pub fn run(world_file: Option<&Path>, config: &GameConfig) -> Result<(), String> {
    if !config.color {
        colored::control::set_override(false);
    }

    let world = super::load_world(world_file)?;
    let mut session = GameSession::with_config(&world, config)
        .map_err(|e| format!("failed to start game: {e}"))?;

    println!("  {}", world.title.bold());
    println!("  Commands: north, south, east, west, north east, north west,");
    println!("            south east, south west, talk, take, fly\n");
    print_room(&session.view(&world), config.show_exits);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim_end_matches(['\n', '\r']);
        let event = session.process(&world, input);
        print_event(&event, config.show_exits);

        if session.is_concluded() {
            break;
        }
    }

    Ok(())
}

fn print_event(event: &OutputEvent, show_exits: bool) {
    match (&event.notice, &event.text) {
        (Some(notice), _) => {
            println!("{}", notice.to_string().yellow());
            let suggestion = match notice {
                Notice::UnrecognizedCommand(input) => suggest_command(input),
                _ => None,
            };
            if let Some(cmd) = suggestion {
                println!("{}", format!("Did you mean '{cmd}'?").dimmed());
            }
            println!();
        }
        (None, Some(text)) => {
            let text = match event.outcome {
                Some(outcome) if outcome.is_victory() => text.green().bold(),
                Some(_) => text.red().bold(),
                None => text.normal(),
            };
            println!("{text}\n");
        }
        // A successful move: show where we ended up.
        (None, None) => print_room(event, show_exits),
    }
}

fn print_room(event: &OutputEvent, show_exits: bool) {
    println!("{}", event.room_description.bold());
    println!("{}", event.occupant_message);
    if show_exits {
        for exit in &event.exit_descriptions {
            println!("{}", exit.cyan());
        }
    }
    println!();
}
