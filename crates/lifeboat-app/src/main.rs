//! lifeboat: headless LIFEBOAT session runner.
//!
//! Usage:
//!   lifeboat [--config tuning.json] [--seed N] [--seconds N] [--realtime]
//!
//! Plays one session with the autopilot at the helm, prints a status line
//! per tick, then a JSON summary on stdout.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{error, info};
use tracing_subscriber::prelude::*;

use lifeboat_app::frontend::{ConsoleFrontend, Frontend};
use lifeboat_app::game_loop::{run_fixed_step, spawn_game_loop, FRAME_DURATION};
use lifeboat_app::state::{AppState, GameLoopCommand};
use lifeboat_core::config::TuningConfig;
use lifeboat_core::enums::EncounterPhase;
use lifeboat_sim::engine::{EncounterController, SimConfig};

struct CliArgs {
    config: Option<PathBuf>,
    seed: u64,
    seconds: u64,
    realtime: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: None,
            seed: 42,
            seconds: 60,
            realtime: false,
        }
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    let tuning = match &cli.config {
        Some(path) => match TuningConfig::load(path) {
            Ok(tuning) => tuning,
            Err(err) => {
                error!(%err, "could not load tuning");
                process::exit(1);
            }
        },
        None => TuningConfig::default(),
    };
    let config = SimConfig {
        seed: cli.seed,
        tuning,
    };
    let total = Duration::from_secs(cli.seconds);
    let mut console = ConsoleFrontend::new(std::io::stdout(), cli.seed);

    if cli.realtime {
        if let Err(err) = run_realtime(config, total, &mut console) {
            error!(%err, "real-time session failed");
            process::exit(1);
        }
    } else {
        let mut controller = EncounterController::new(config);
        run_fixed_step(&mut controller, &mut console, total, FRAME_DURATION);
    }

    match serde_json::to_string_pretty(console.summary()) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!(%err, "could not serialize summary");
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run on the wall clock: the game loop thread owns the controller while
/// this thread presents frames and forwards input.
fn run_realtime(
    config: SimConfig,
    total: Duration,
    frontend: &mut dyn Frontend,
) -> Result<(), String> {
    let app = AppState::new();
    let (tx, handle) = spawn_game_loop(config, Arc::clone(&app.latest_snapshot))
        .map_err(|err| format!("failed to spawn game loop thread: {err}"))?;
    if let Ok(mut command_tx) = app.command_tx.lock() {
        *command_tx = Some(tx);
    }

    let deadline = Instant::now() + total;
    while Instant::now() < deadline {
        if let Some(snapshot) = app.take_snapshot() {
            frontend.present(&snapshot);
            if snapshot.phase == EncounterPhase::Lost {
                break;
            }
            for command in frontend.poll_input(&snapshot) {
                app.send(GameLoopCommand::PlayerCommand(command));
            }
        }
        std::thread::sleep(FRAME_DURATION);
    }

    app.send(GameLoopCommand::Shutdown);
    handle
        .join()
        .map_err(|_| "game loop thread panicked".to_string())?;
    if let Some(snapshot) = app.take_snapshot() {
        frontend.present(&snapshot);
    }
    info!("real-time session finished");
    Ok(())
}

/// `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<CliArgs>, String> {
    let mut cli = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                cli.config = Some(PathBuf::from(value_of(args, i, "--config")?));
                i += 1;
            }
            "--seed" => {
                let raw = value_of(args, i, "--seed")?;
                cli.seed = raw
                    .parse()
                    .map_err(|_| format!("--seed expects an integer, got {raw}"))?;
                i += 1;
            }
            "--seconds" => {
                let raw = value_of(args, i, "--seconds")?;
                cli.seconds = raw
                    .parse()
                    .map_err(|_| format!("--seconds expects an integer, got {raw}"))?;
                i += 1;
            }
            "--realtime" => cli.realtime = true,
            "help" | "--help" | "-h" => return Ok(None),
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(Some(cli))
}

fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn print_usage() {
    eprintln!(
        "lifeboat: headless LIFEBOAT session runner\n\
         \n\
           --config <path>  Tuning JSON file (missing fields keep defaults)\n\
           --seed <N>       RNG seed (default: 42)\n\
           --seconds <N>    Session length in game seconds (default: 60)\n\
           --realtime       Run on the wall clock with a game loop thread\n\
         \n\
         Logging honours RUST_LOG (default: info).\n"
    );
}
