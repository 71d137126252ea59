//! Player body contract and the stock blob implementation
//!
//! The session only needs to spawn, jump, update and read back a position and
//! radius. `BlobPlayer` is the body the binary ships with; hosts may plug in
//! their own.

use glam::Vec2;

use super::platform::Platform;
use super::world::Circle;
use crate::renderer::{Color, Renderer};

/// Horizontal acceleration per frame at full input
const RUN_ACCEL: f32 = 0.55;
/// Horizontal speed cap (pixels per frame)
const MAX_RUN: f32 = 4.0;
/// Velocity kept per frame with no input
const GROUND_FRICTION: f32 = 0.8;
const AIR_DRAG: f32 = 0.95;
/// Terminal fall speed, keeps thin platforms from being tunnelled through
const MAX_FALL: f32 = 16.0;

/// A body the session can spawn, drive and query
pub trait Player {
    /// Place at `start` with zero velocity and adopt the level's physics
    fn spawn(&mut self, start: Circle, gravity: f32, jump_velocity: f32);

    /// Advance one frame against the level's platforms
    fn update(&mut self, platforms: &[Platform]);

    fn jump(&mut self);

    /// Held horizontal input in -1..=1; bodies without steering may ignore it
    fn set_move_dir(&mut self, _dir: f32) {}

    fn pos(&self) -> Vec2;

    fn radius(&self) -> f32;

    fn draw(&self, renderer: &mut dyn Renderer, color: Color);
}

/// Circle-shaped body colliding as its bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct BlobPlayer {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub on_ground: bool,
    move_dir: f32,
}

impl Default for BlobPlayer {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: crate::consts::DEFAULT_START.2,
            gravity: crate::consts::DEFAULT_GRAVITY,
            jump_velocity: crate::consts::DEFAULT_JUMP_VELOCITY,
            on_ground: false,
            move_dir: 0.0,
        }
    }
}

impl BlobPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    fn overlapping<'a>(&self, platforms: &'a [Platform]) -> impl Iterator<Item = &'a Platform> {
        let r = self.radius;
        let (left, right) = (self.pos.x - r, self.pos.x + r);
        let (top, bottom) = (self.pos.y - r, self.pos.y + r);
        platforms
            .iter()
            .filter(move |p| p.overlaps(left, right, top, bottom))
    }

    fn resolve_x(&mut self, platforms: &[Platform]) {
        let hits: Vec<Platform> = self.overlapping(platforms).copied().collect();
        for p in hits {
            if self.vel.x > 0.0 {
                self.pos.x = p.left() - self.radius;
            } else if self.vel.x < 0.0 {
                self.pos.x = p.right() + self.radius;
            }
            self.vel.x = 0.0;
        }
    }

    fn resolve_y(&mut self, platforms: &[Platform]) {
        self.on_ground = false;
        let hits: Vec<Platform> = self.overlapping(platforms).copied().collect();
        for p in hits {
            if self.vel.y > 0.0 {
                self.pos.y = p.top() - self.radius;
                self.on_ground = true;
            } else if self.vel.y < 0.0 {
                self.pos.y = p.bottom() + self.radius;
            }
            self.vel.y = 0.0;
        }
    }
}

impl Player for BlobPlayer {
    fn spawn(&mut self, start: Circle, gravity: f32, jump_velocity: f32) {
        self.pos = start.pos;
        self.radius = start.radius;
        self.vel = Vec2::ZERO;
        self.gravity = gravity;
        self.jump_velocity = jump_velocity;
        self.on_ground = false;
    }

    fn update(&mut self, platforms: &[Platform]) {
        if self.move_dir != 0.0 {
            self.vel.x = (self.vel.x + RUN_ACCEL * self.move_dir).clamp(-MAX_RUN, MAX_RUN);
        } else {
            self.vel.x *= if self.on_ground { GROUND_FRICTION } else { AIR_DRAG };
        }
        self.vel.y = (self.vel.y + self.gravity).min(MAX_FALL);

        // One axis at a time so corners resolve cleanly
        self.pos.x += self.vel.x;
        self.resolve_x(platforms);
        self.pos.y += self.vel.y;
        self.resolve_y(platforms);
    }

    fn jump(&mut self) {
        if self.on_ground {
            self.vel.y = self.jump_velocity;
            self.on_ground = false;
        }
    }

    fn set_move_dir(&mut self, dir: f32) {
        self.move_dir = if dir.is_finite() { dir.clamp(-1.0, 1.0) } else { 0.0 };
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn draw(&self, renderer: &mut dyn Renderer, color: Color) {
        renderer.fill_circle(self.pos, self.radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Vec<Platform> {
        vec![Platform::new(0.0, 300.0, 1000.0, 36.0)]
    }

    fn spawned(x: f32, y: f32) -> BlobPlayer {
        let mut p = BlobPlayer::new();
        p.spawn(Circle::new(Vec2::new(x, y), 20.0), 0.65, -11.0);
        p
    }

    #[test]
    fn test_lands_on_platform() {
        let mut p = spawned(100.0, 200.0);
        for _ in 0..120 {
            p.update(&floor());
        }
        assert!(p.on_ground);
        assert_eq!(p.pos.y, 280.0);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut p = spawned(100.0, 100.0);
        p.jump();
        assert_eq!(p.vel.y, 0.0);

        for _ in 0..120 {
            p.update(&floor());
        }
        p.jump();
        assert_eq!(p.vel.y, -11.0);
        p.update(&floor());
        assert!(p.pos.y < 280.0);
    }

    #[test]
    fn test_wall_stops_horizontal_motion() {
        let platforms = vec![
            Platform::new(0.0, 300.0, 1000.0, 36.0),
            Platform::new(200.0, 200.0, 20.0, 100.0),
        ];
        let mut p = spawned(100.0, 280.0);
        p.set_move_dir(1.0);
        for _ in 0..200 {
            p.update(&platforms);
        }
        assert_eq!(p.pos.x, 180.0);
    }

    #[test]
    fn test_falls_without_platforms() {
        let mut p = spawned(0.0, 0.0);
        for _ in 0..10 {
            p.update(&[]);
        }
        assert!(p.pos.y > 0.0);
        assert!(!p.on_ground);
    }

    #[test]
    fn test_spawn_resets_velocity_and_physics() {
        let mut p = spawned(0.0, 0.0);
        p.vel = Vec2::new(3.0, 5.0);
        p.spawn(Circle::new(Vec2::new(10.0, 20.0), 26.0), 0.4, -9.0);
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.pos, Vec2::new(10.0, 20.0));
        assert_eq!(p.radius, 26.0);
        assert_eq!(p.gravity, 0.4);
        assert_eq!(p.jump_velocity, -9.0);
    }

    #[test]
    fn test_move_dir_sanitised() {
        let mut p = spawned(0.0, 0.0);
        p.set_move_dir(f32::NAN);
        p.update(&[]);
        assert_eq!(p.vel.x, 0.0);
    }
}
