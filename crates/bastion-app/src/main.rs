use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use log::{error, info};

use bastion_app::config::{AppConfig, DEFAULT_CONFIG_PATH};
use bastion_app::error::AppError;
use bastion_app::game_loop;
use bastion_app::state::{new_log_lines, AppState};
use bastion_core::commands::PlayerCommand;

/// Interval between HUD reports.
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
    };
    info!("BASTION starting (seed {})", config.seed);

    let state = AppState::new();
    let handle = game_loop::spawn_game_loop(&config, &state)?;
    state.send_command(PlayerCommand::StartMission)?;

    let started = Instant::now();
    let mut printed_total = 0;
    loop {
        std::thread::sleep(REPORT_INTERVAL);
        if handle.is_finished() {
            return Err(AppError::LoopDisconnected);
        }

        if let Some(snap) = state.snapshot() {
            let hud = &snap.hud;
            info!(
                "t={:>5} hull={:>3} shields={:>3} torpedoes={:>2} score={:>6} enemies={} wave={}",
                snap.time.tick,
                hud.hull,
                hud.shields,
                hud.torpedoes,
                hud.score,
                snap.enemies.len(),
                snap.mission.phase,
            );
            for line in new_log_lines(printed_total, snap.log_total, &snap.log) {
                println!("{line}");
            }
            printed_total = snap.log_total;
        }

        if config.run_time().is_some_and(|limit| started.elapsed() >= limit) {
            break;
        }
    }

    state.shutdown();
    handle.join().map_err(|_| AppError::LoopPanicked)?;
    info!("BASTION stopped");
    Ok(())
}
