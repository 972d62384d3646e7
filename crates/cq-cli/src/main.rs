//! CLI frontend for Castle Quest.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use cq_fiction::GameConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cq",
    about = "Castle Quest: find the kidnapped King and bring him home",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter when RUST_LOG is unset (e.g. warn, debug, cq_fiction=debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively
    Play {
        /// World content file (default: the bundled castle)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Start in this room instead of the world's start room
        #[arg(short, long)]
        start: Option<String>,

        /// Name of the player character
        #[arg(short, long, default_value = "")]
        name: String,

        /// Do not list exits after each room description
        #[arg(long)]
        no_exits: bool,

        /// Disable coloured output
        #[arg(long)]
        no_color: bool,
    },

    /// Load and validate a world content file
    Check {
        /// World content file
        #[arg(short, long)]
        world: PathBuf,
    },

    /// List rooms, occupants, gifts, and exits
    Rooms {
        /// World content file (default: the bundled castle)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Write the bundled castle as a JSON content file
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Play {
            world,
            start,
            name,
            no_exits,
            no_color,
        } => {
            let mut config = GameConfig::default()
                .with_player_name(name)
                .with_exits(!no_exits)
                .with_color(!no_color);
            if let Some(room) = start {
                config = config.with_start_room(room);
            }
            commands::play::run(world.as_deref(), &config)
        }
        Commands::Check { world } => commands::check::run(&world),
        Commands::Rooms { world } => commands::rooms::run(world.as_deref()),
        Commands::Export { output } => commands::export::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
