//! Blob Platformer - a data-driven 2D platformer
//!
//! Core modules:
//! - `sim`: Level model and progression state machine (platforms, generator, world, session)
//! - `levels`: Level file format and loading
//! - `renderer`: Draw-call surface and triangle-mesh backend
//! - `hud`: Text overlays derived from session state
//! - `settings`: Runtime configuration

pub mod error;
pub mod hud;
pub mod levels;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use levels::{LevelRecord, LevelSet};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Surface size used when a level has no platforms to measure
    pub const DEFAULT_SURFACE_WIDTH: f32 = 900.0;
    pub const DEFAULT_SURFACE_HEIGHT: f32 = 560.0;
    /// How far below the surface the player may fall before respawning
    pub const FALL_MARGIN: f32 = 100.0;

    /// Host frame rate; all physics constants are per frame
    pub const FRAME_RATE: u32 = 60;

    /// Generated geometry sizes
    pub const GROUND_HEIGHT: f32 = 36.0;
    pub const STEP_THICKNESS: f32 = 12.0;
    pub const FLOATING_WIDTH: f32 = 50.0;
    pub const DIAGONAL_WIDTH: f32 = 60.0;
    /// Vertical rise between consecutive diagonal platforms
    pub const DIAGONAL_RISE: f32 = 40.0;

    /// World defaults for fields a level record leaves out
    pub const DEFAULT_LEVEL_NAME: &str = "Level";
    pub const DEFAULT_GRAVITY: f32 = 0.65;
    pub const DEFAULT_JUMP_VELOCITY: f32 = -11.0;
    pub const DEFAULT_START: (f32, f32, f32) = (80.0, 180.0, 26.0);
    pub const DEFAULT_GOAL: (f32, f32, f32) = (0.0, 0.0, 20.0);
    pub const DEFAULT_BACKGROUND: &str = "#F0F0F0";
    pub const DEFAULT_PLATFORM_COLOR: &str = "#C8C8C8";
    pub const DEFAULT_ACTOR_COLOR: &str = "#1478FF";
}
