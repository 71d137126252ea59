//! Level progression state machine
//!
//! A `GameSession` owns the level list, the active `WorldLevel` and the player
//! body. Every transition (load, respawn, advance, restart, cycle) completes
//! inside one call, so a renderer never sees a half-loaded level.

use super::player::Player;
use super::world::WorldLevel;
use crate::levels::LevelSet;
use crate::renderer::Renderer;
use crate::settings::Settings;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A level is live and the player is simulated
    Playing,
    /// Every level's goal has been reached; world and index are frozen, with
    /// the index one past the last level
    Completed,
}

/// Logical inputs the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    /// Load the next level, wrapping to the first
    CycleLevel,
    /// Back to the first level
    Restart,
}

/// Observable transitions, returned from each call that may cause them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LevelLoaded { index: usize },
    /// Player fell off the bottom and was put back at the level start
    Respawned,
    /// Goal reached on the last level
    Completed,
}

pub struct GameSession<P: Player> {
    levels: LevelSet,
    level_index: usize,
    world: WorldLevel,
    player: P,
    phase: SessionPhase,
    /// Surface size set by the last load
    surface: (f32, f32),
    default_size: (f32, f32),
    fall_margin: f32,
    /// Simulation steps taken
    pub time_ticks: u64,
}

impl<P: Player> GameSession<P> {
    /// Start a run on the first level with default settings
    pub fn new(levels: LevelSet, player: P, renderer: &mut dyn Renderer) -> Self {
        Self::with_settings(levels, player, &Settings::default(), renderer)
    }

    pub fn with_settings(
        levels: LevelSet,
        player: P,
        settings: &Settings,
        renderer: &mut dyn Renderer,
    ) -> Self {
        let world = WorldLevel::from_record(levels.record(0));
        let mut session = Self {
            levels,
            level_index: 0,
            world,
            player,
            phase: SessionPhase::Playing,
            surface: (settings.default_width, settings.default_height),
            default_size: (settings.default_width, settings.default_height),
            fall_margin: settings.fall_margin,
            time_ticks: 0,
        };
        session.load(0, renderer);
        session
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn world(&self) -> &WorldLevel {
        &self.world
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    pub fn surface_size(&self) -> (f32, f32) {
        self.surface
    }

    /// Build a fresh world for level `index`, fit the surface to it and spawn.
    /// `index` must be below `level_count()`.
    fn load(&mut self, index: usize, renderer: &mut dyn Renderer) -> SessionEvent {
        self.world = WorldLevel::from_record(self.levels.record(index));
        self.level_index = index;
        self.phase = SessionPhase::Playing;

        let width = self.world.infer_width(self.default_size.0);
        let height = self.world.infer_height(self.default_size.1);
        self.surface = (width, height);
        renderer.resize(width, height);

        self.spawn_player();

        log::info!(
            "Loaded level {}/{} \"{}\" ({} platforms, {}x{})",
            index + 1,
            self.levels.len(),
            self.world.name,
            self.world.platforms.len(),
            width,
            height
        );
        SessionEvent::LevelLoaded { index }
    }

    fn spawn_player(&mut self) {
        self.player.spawn(
            self.world.start,
            self.world.gravity,
            self.world.jump_velocity,
        );
    }

    /// Respawn if the player is well below the visible area
    fn check_fall(&mut self) -> Option<SessionEvent> {
        if self.player.pos().y > self.surface.1 + self.fall_margin {
            log::debug!("Player fell on level {}, respawning", self.level_index + 1);
            self.spawn_player();
            return Some(SessionEvent::Respawned);
        }
        None
    }

    /// Player circle strictly overlaps the goal circle
    pub fn goal_reached(&self) -> bool {
        let distance = self.player.pos().distance(self.world.goal.pos);
        distance < self.player.radius() + self.world.goal.radius
    }

    /// Move to the next level, or finish the run after the last one
    fn advance(&mut self, renderer: &mut dyn Renderer) -> SessionEvent {
        let next = self.level_index + 1;
        if next >= self.levels.len() {
            self.level_index = next;
            self.phase = SessionPhase::Completed;
            log::info!("All {} levels complete", self.levels.len());
            SessionEvent::Completed
        } else {
            self.load(next, renderer)
        }
    }

    /// One simulation step: player physics, then fall check, then goal check
    pub fn step(&mut self, renderer: &mut dyn Renderer) -> Vec<SessionEvent> {
        self.time_ticks += 1;
        let mut events = Vec::new();

        if self.phase == SessionPhase::Completed {
            return events;
        }

        self.player.update(&self.world.platforms);

        if let Some(event) = self.check_fall() {
            events.push(event);
        }
        if self.goal_reached() {
            events.push(self.advance(renderer));
        }

        events
    }

    /// Apply a logical input action
    pub fn handle(&mut self, action: Action, renderer: &mut dyn Renderer) -> Option<SessionEvent> {
        match action {
            Action::Jump => {
                if self.phase == SessionPhase::Playing {
                    self.player.jump();
                }
                None
            }
            Action::CycleLevel => {
                let next = (self.level_index + 1) % self.levels.len();
                Some(self.load(next, renderer))
            }
            Action::Restart => {
                log::info!("Restarting from level 1");
                Some(self.load(0, renderer))
            }
        }
    }
}
