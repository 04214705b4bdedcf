//! Lurch entry point
//!
//! Native headless runner: loads the config, then drives the frame loop with
//! a simple autopilot in place of a keyboard and a recording renderer in
//! place of a window.
//!
//! Usage: `lurch [CONFIG.json] [--seed N] [--frames N]`

use std::path::Path;
use std::process::ExitCode;

use lurch::consts::DEFAULT_SEED;
use lurch::renderer::RecordingRenderer;
use lurch::sim::{GameState, RunPhase};
use lurch::{Game, SimulationConfig};

/// Rendered frame duration for the headless loop (60 Hz display)
const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 60 * 60;

struct Args {
    config_path: Option<String>,
    seed: u64,
    frames: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config_path: None,
        seed: DEFAULT_SEED,
        frames: DEFAULT_FRAMES,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse().map_err(|e| format!("bad --seed {value}: {e}"))?;
            }
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = value.parse().map_err(|e| format!("bad --frames {value}: {e}"))?;
            }
            other if other.starts_with("--") => return Err(format!("unknown option {other}")),
            path => args.config_path = Some(path.to_string()),
        }
    }
    Ok(args)
}

/// Press when idle, or when the body sinks below the opening ahead of it
fn autopilot(state: &GameState) -> bool {
    if state.phase == RunPhase::Idle {
        return true;
    }

    let probe = state.body.probe();
    let target = state
        .obstacles
        .iter()
        .filter(|o| o.x + state.config.obstacle_width >= probe.x)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        .map(|o| o.gap_center() + o.gap_height() / 4.0)
        .unwrap_or(state.config.gap_center_y);

    state.body.y > target && state.body.velocity > 0.0
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Lurch (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            eprintln!("usage: lurch [CONFIG.json] [--seed N] [--frames N]");
            return ExitCode::from(2);
        }
    };

    let config = match SimulationConfig::load_or_default(args.config_path.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Press 'SPACE' to start game. (autopilot, seed {})", args.seed);

    let mut game = Game::new(config, args.seed);
    let mut renderer = RecordingRenderer::new();
    let mut steps = 0u64;
    let mut terminations = 0u32;
    let mut longest_run = 0u64;

    let mut last_press = false;
    for _ in 0..args.frames {
        // Release between presses so the edge trigger sees each one
        let press = !last_press && autopilot(game.state());
        last_press = press;

        let mut input = || press;
        let report = game.frame(FRAME_DT, &mut input, &mut renderer);
        steps += report.steps_run as u64;

        if report.termination.is_some() {
            terminations += 1;
            longest_run = longest_run.max(game.state().time_ticks);
        }
    }
    longest_run = longest_run.max(game.state().time_ticks);

    log::info!(
        "Simulated {} steps over {} frames: {} runs, {} terminations, longest run {} steps, {} quads last frame",
        steps,
        renderer.frames,
        game.state().runs_started,
        terminations,
        longest_run,
        renderer.instances.len()
    );
    ExitCode::SUCCESS
}
