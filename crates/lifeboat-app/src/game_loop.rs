//! Game loop thread: feeds real elapsed time into the encounter controller.
//!
//! The controller is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots are merged into
//! shared state for the presenter to take.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::info;

use lifeboat_core::enums::EncounterPhase;
use lifeboat_core::state::EncounterSnapshot;
use lifeboat_sim::engine::{EncounterController, SimConfig};
use lifeboat_sim::random::RandomSource;

use crate::frontend::Frontend;
use crate::state::GameLoopCommand;

/// Frames per second of the real-time loop.
pub const FRAME_RATE: u32 = 30;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the presenter to use and the thread
/// handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<EncounterSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("lifeboat-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<EncounterSnapshot>>,
) {
    let seed = config.seed;
    let mut controller = EncounterController::new(config);
    publish(latest_snapshot, controller.snapshot());
    info!(seed, "game loop started");

    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    controller.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(tick = controller.state().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance by the real time since the previous frame
        let now = Instant::now();
        let snapshot = controller.advance(now - last_frame);
        last_frame = now;

        // 3. Hand the frame to the presenter
        publish(latest_snapshot, snapshot);

        // 4. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

/// Store `snapshot` for the presenter. If the previous one was never taken,
/// its events are kept ahead of the new ones so none are dropped.
pub fn publish(slot: &Mutex<Option<EncounterSnapshot>>, mut snapshot: EncounterSnapshot) {
    if let Ok(mut lock) = slot.lock() {
        if let Some(previous) = lock.take() {
            let mut events = previous.events;
            events.append(&mut snapshot.events);
            snapshot.events = events;
        }
        *lock = Some(snapshot);
    }
}

/// Drive a session on simulated time, without sleeping.
///
/// Each frame advances the controller by `frame`, until `total` has elapsed
/// or the ship is lost. Returns the last snapshot.
pub fn run_fixed_step<R: RandomSource>(
    controller: &mut EncounterController<R>,
    frontend: &mut dyn Frontend,
    total: Duration,
    frame: Duration,
) -> EncounterSnapshot {
    let mut snapshot = controller.snapshot();
    frontend.present(&snapshot);
    let mut elapsed = Duration::ZERO;
    while elapsed < total && snapshot.phase != EncounterPhase::Lost {
        controller.queue_commands(frontend.poll_input(&snapshot));
        snapshot = controller.advance(frame);
        frontend.present(&snapshot);
        elapsed += frame;
    }
    snapshot
}
