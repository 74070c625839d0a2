//! boomerang-app: plays one scripted round and reports the score.
//!
//! Usage:
//!   boomerang-app [--config tuning.json] [--seed N] [--fast]

use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use boomerang_app::args::{self, RunnerArgs, RunnerError};
use boomerang_app::autoplay::Autoplay;
use boomerang_app::game_loop;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("{}", args::usage());
        return;
    }

    if let Err(err) = run(&argv) {
        eprintln!("Error: {err}");
        if matches!(err, RunnerError::Usage(_)) {
            eprintln!("{}", args::usage());
        }
        process::exit(1);
    }
}

fn run(argv: &[String]) -> Result<(), RunnerError> {
    let options = RunnerArgs::parse(argv)?;
    let config = options.sim_config()?;
    info!(config = ?options.config, seed = options.seed, "starting round");

    let handle = game_loop::spawn_game_loop(config, options.pacing)?;
    let mut autoplay = Autoplay::new();

    while let Ok(snap) = handle.snapshot_rx.recv() {
        if autoplay.is_finished(&snap) {
            break;
        }
        for command in autoplay.respond(&snap) {
            if !handle.send(command) {
                break;
            }
        }
    }

    match handle.shutdown() {
        Some(snap) => {
            let score = &snap.score;
            info!(
                score = score.score,
                targets_destroyed = score.targets_destroyed,
                targets_expired = score.targets_expired,
                throws = score.throws,
                returns = score.returns,
                "round finished"
            );
            println!("Final score: {}", score.score);
        }
        None => info!("game loop exited before producing a snapshot"),
    }
    Ok(())
}
