//! Gridiron CLI
//!
//! Runs the simulation engine in fast-forward mode from two team JSON files.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use gridiron_core::{GameSession, Tempo};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gridiron")]
#[command(about = "Simulate American football games play by play", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct GameArgs {
    /// Home team JSON file
    #[arg(long)]
    home: PathBuf,

    /// Away team JSON file
    #[arg(long)]
    away: PathBuf,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Pacing: hurry-up, normal or slow
    #[arg(long)]
    tempo: Option<Tempo>,

    /// Engine config JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Play a full game and print the box score
    Play {
        #[command(flatten)]
        game: GameArgs,

        /// Print every event as a JSON line before the box score
        #[arg(long, default_value = "false")]
        events: bool,
    },

    /// Play drive by drive, printing each drive's events as JSON lines
    Drive {
        #[command(flatten)]
        game: GameArgs,

        /// Number of drives to play
        #[arg(long, default_value_t = 1)]
        drives: u32,
    },
}

#[cfg(feature = "cli")]
fn start(args: &GameArgs) -> Result<(GameSession, gridiron_core::Team, gridiron_core::Team)> {
    let home = gridiron_cli::load_team(&args.home)?;
    let away = gridiron_cli::load_team(&args.away)?;
    let config = gridiron_cli::load_config(args.config.as_deref(), args.tempo)?;
    let session = GameSession::new(home.clone(), away.clone(), config, args.seed)
        .context("Failed to start game")?;
    Ok((session, home, away))
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = std::io::stdout();

    match cli.command {
        Commands::Play { game, events } => {
            let (mut session, home, away) = start(&game)?;
            log::info!("{} vs {} (seed {}, {})", away.name, home.name, game.seed, session.tempo());

            let emitted = session.skip_to_end();
            if events {
                gridiron_cli::write_events(&mut stdout.lock(), &emitted)?;
            }
            print!("{}", gridiron_cli::box_score(&session.result(), &home, &away));
        }

        Commands::Drive { game, drives } => {
            let (mut session, _, _) = start(&game)?;
            for _ in 0..drives {
                if session.is_complete() {
                    break;
                }
                let emitted = session.skip_to_drive();
                gridiron_cli::write_events(&mut stdout.lock(), &emitted)?;
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("gridiron CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
