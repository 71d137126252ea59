//! Blob Platformer entry point
//!
//! Headless native runner: loads a level pack, drives the session with a
//! simple autopilot and logs every transition. Windowed hosts supply their own
//! renderer and input and call the same `tick`.
//!
//! Usage: `blob-platformer [levels.json]`

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
use blob_platformer::{
    LevelSet, Settings,
    hud::{draw_frame, level_number},
    renderer::MeshRenderer,
    sim::{Action, BlobPlayer, GameSession, SessionEvent, TickInput, tick},
};

/// Autopilot jump interval in frames
#[cfg(not(target_arch = "wasm32"))]
const AUTOPILOT_JUMP_EVERY: u64 = 45;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Blob Platformer (headless) starting...");

    let settings = Settings::load();
    let levels_path = std::env::args()
        .nth(1)
        .or_else(|| settings.levels_path.clone());

    let levels = match &levels_path {
        Some(path) => LevelSet::load(Path::new(path)),
        None => LevelSet::builtin(),
    };
    let levels = match levels {
        Ok(levels) => levels,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut renderer = MeshRenderer::new(settings.default_width, settings.default_height);
    let mut session =
        GameSession::with_settings(levels, BlobPlayer::new(), &settings, &mut renderer);

    let mut respawns = 0u32;
    let mut frames = 0u64;
    while frames < settings.max_frames {
        let mut input = TickInput {
            move_dir: 1.0,
            ..Default::default()
        };
        if frames % AUTOPILOT_JUMP_EVERY == 0 {
            input.actions.push(Action::Jump);
        }

        let events = tick(&mut session, &input, &mut renderer);
        frames += 1;

        renderer.begin_frame();
        draw_frame(&session, &mut renderer, &settings);

        for event in &events {
            match event {
                SessionEvent::LevelLoaded { index } => {
                    log::info!("Frame {}: entered level {}", frames, index + 1)
                }
                SessionEvent::Respawned => respawns += 1,
                SessionEvent::Completed => log::info!("Frame {}: run complete", frames),
            }
        }
        if session.is_completed() {
            break;
        }
    }

    let seconds = frames as f32 / settings.frame_rate.max(1) as f32;
    log::info!(
        "Stopped after {} frames ({:.1}s): level {}/{}, {} respawns, completed: {}",
        frames,
        seconds,
        level_number(&session),
        session.level_count(),
        respawns,
        session.is_completed()
    );
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `sim::tick` themselves
}
