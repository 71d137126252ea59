//! Frame composition: world, player, HUD text and the end screen
//!
//! Read-only views of session state. Nothing here changes the simulation.

use glam::Vec2;

use crate::renderer::{Renderer, TextAlign, colors};
use crate::settings::Settings;
use crate::sim::{GameSession, Player};

pub const CONTROLS_HINT: &str = "Move: A/D or ←/→ • Jump: Space/W/↑ • Next: N";
pub const END_HINT: &str = "Press R to restart or N to play a specific level";

const HUD_TEXT_SIZE: f32 = 14.0;
const HUD_LEFT: f32 = 10.0;
const HUD_FIRST_LINE: f32 = 18.0;
const HUD_LINE_HEIGHT: f32 = 18.0;

/// 1-based number of the level on screen. After completion the index sits
/// one past the end, so this clamps to the last level.
pub fn level_number<P: Player>(session: &GameSession<P>) -> usize {
    session.level_index().min(session.level_count() - 1) + 1
}

/// Level name, progress and controls, top to bottom
pub fn hud_lines<P: Player>(session: &GameSession<P>) -> [String; 3] {
    [
        session.world().name.clone(),
        format!("Level {} / {}", level_number(session), session.level_count()),
        CONTROLS_HINT.to_string(),
    ]
}

pub fn draw_hud<P: Player>(session: &GameSession<P>, renderer: &mut dyn Renderer) {
    for (i, line) in hud_lines(session).iter().enumerate() {
        let y = HUD_FIRST_LINE + i as f32 * HUD_LINE_HEIGHT;
        renderer.text(
            line,
            Vec2::new(HUD_LEFT, y),
            HUD_TEXT_SIZE,
            TextAlign::Left,
            colors::HUD_TEXT,
        );
    }
}

pub fn draw_end_screen(level_count: usize, renderer: &mut dyn Renderer) {
    let (w, h) = renderer.size();
    let center = Vec2::new(w / 2.0, h / 2.0);

    renderer.clear(colors::END_BACKGROUND);
    renderer.text(
        "🎉 YOU WIN! 🎉",
        center - Vec2::new(0.0, 100.0),
        64.0,
        TextAlign::Center,
        colors::END_TITLE,
    );
    renderer.text(
        &format!("You conquered all {} levels!", level_count),
        center,
        32.0,
        TextAlign::Center,
        colors::END_SUBTITLE,
    );
    renderer.text(
        END_HINT,
        center + Vec2::new(0.0, 80.0),
        18.0,
        TextAlign::Center,
        colors::END_HINT,
    );
}

/// Compose one frame for the session's current phase
pub fn draw_frame<P: Player>(
    session: &GameSession<P>,
    renderer: &mut dyn Renderer,
    settings: &Settings,
) {
    if session.is_completed() {
        draw_end_screen(session.level_count(), renderer);
        return;
    }

    let world = session.world();
    world.draw(renderer, session.time_ticks, settings.effective_goal_pulse());
    session.player().draw(renderer, world.theme.actor);

    if settings.show_hud {
        draw_hud(session, renderer);
    }
}
