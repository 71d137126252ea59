//! One resolved, immutable level
//!
//! A `WorldLevel` is built in one go from a level record and never changes
//! afterwards. Loading another level replaces it wholesale.

use glam::Vec2;

use super::generator::generate;
use super::platform::Platform;
use crate::consts::{DEFAULT_ACTOR_COLOR, DEFAULT_BACKGROUND, DEFAULT_PLATFORM_COLOR};
use crate::levels::{LevelRecord, PlatformSource, ResolvedLevel};
use crate::renderer::{Color, Renderer, colors, parse_hex_color};

/// Level colour scheme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub platform: Color,
    /// Player body colour
    pub actor: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let hex = |s: &str| parse_hex_color(s).unwrap_or([0.0, 0.0, 0.0, 1.0]);
        Self {
            background: hex(DEFAULT_BACKGROUND),
            platform: hex(DEFAULT_PLATFORM_COLOR),
            actor: hex(DEFAULT_ACTOR_COLOR),
        }
    }
}

/// A circle in world space (spawn point or goal)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldLevel {
    pub name: String,
    pub theme: Theme,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub start: Circle,
    pub goal: Circle,
    /// Fully resolved at construction, in draw order
    pub platforms: Vec<Platform>,
}

impl WorldLevel {
    pub fn from_record(record: &LevelRecord) -> Self {
        Self::from_resolved(record.resolve())
    }

    pub fn from_resolved(level: ResolvedLevel) -> Self {
        let descs = match level.source {
            PlatformSource::Literal(list) => list,
            PlatformSource::Generated(params) => generate(&params),
        };

        Self {
            name: level.name,
            theme: level.theme,
            gravity: level.gravity,
            jump_velocity: level.jump_velocity,
            start: level.start,
            goal: level.goal,
            platforms: descs.into_iter().map(Platform::from).collect(),
        }
    }

    /// Rightmost platform edge, or `default_w` for an empty level
    pub fn infer_width(&self, default_w: f32) -> f32 {
        self.platforms
            .iter()
            .map(Platform::right)
            .reduce(f32::max)
            .unwrap_or(default_w)
    }

    /// Lowest platform edge, or `default_h` for an empty level
    pub fn infer_height(&self, default_h: f32) -> f32 {
        self.platforms
            .iter()
            .map(Platform::bottom)
            .reduce(f32::max)
            .unwrap_or(default_h)
    }

    /// Background, platforms and goal. The player draws itself on top.
    pub fn draw(&self, renderer: &mut dyn Renderer, frame: u64, pulse_goal: bool) {
        renderer.clear(self.theme.background);
        for platform in &self.platforms {
            platform.draw(renderer, self.theme.platform);
        }
        self.draw_goal(renderer, frame, pulse_goal);
    }

    fn draw_goal(&self, renderer: &mut dyn Renderer, frame: u64, pulse_goal: bool) {
        let pulse = if pulse_goal {
            1.0 + 0.3 * (frame as f32 * 0.05).sin()
        } else {
            1.0
        };
        let size = self.goal.radius * pulse;

        renderer.stroke_circle(self.goal.pos, size, 3.0, colors::GOAL_OUTER);
        renderer.stroke_circle(self.goal.pos, size / 2.0, 1.0, colors::GOAL_INNER);
    }
}
