//! Deterministic simulation module
//!
//! Level model and progression logic. Everything here is pure and
//! frame-driven:
//! - No randomness; generated levels depend only on their parameters
//! - One `tick` per frame, single-threaded
//! - Drawing goes through the `Renderer` trait only

pub mod generator;
pub mod platform;
pub mod player;
pub mod session;
pub mod tick;
pub mod world;

pub use generator::{GenerationParams, Obstacle, ObstacleKind, generate};
pub use platform::{Platform, PlatformDesc};
pub use player::{BlobPlayer, Player};
pub use session::{Action, GameSession, SessionEvent, SessionPhase};
pub use tick::{TickInput, tick};
pub use world::{Circle, Theme, WorldLevel};
