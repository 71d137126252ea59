//! Per-frame entry point for the host loop

use super::player::Player;
use super::session::{Action, GameSession, SessionEvent};
use crate::renderer::Renderer;

/// Input gathered by the host for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held horizontal input, -1 (left) to 1 (right)
    pub move_dir: f32,
    /// One-shot actions delivered this frame, applied in order
    pub actions: Vec<Action>,
}

impl TickInput {
    pub fn with_action(action: Action) -> Self {
        Self {
            actions: vec![action],
            ..Default::default()
        }
    }
}

/// Apply this frame's actions, then run one simulation step
///
/// Actions land before the step's fall and goal checks here, but hosts that
/// deliver input between frames get no ordering guarantee.
pub fn tick<P: Player>(
    session: &mut GameSession<P>,
    input: &TickInput,
    renderer: &mut dyn Renderer,
) -> Vec<SessionEvent> {
    session.player_mut().set_move_dir(input.move_dir);

    let mut events: Vec<SessionEvent> = input
        .actions
        .iter()
        .filter_map(|&action| session.handle(action, renderer))
        .collect();

    events.extend(session.step(renderer));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::LevelSet;
    use crate::renderer::MeshRenderer;
    use crate::sim::{BlobPlayer, SessionPhase};

    fn builtin_session() -> (GameSession<BlobPlayer>, MeshRenderer) {
        let mut r = MeshRenderer::default();
        let s = GameSession::new(LevelSet::builtin().unwrap(), BlobPlayer::new(), &mut r);
        (s, r)
    }

    #[test]
    fn test_player_settles_on_first_level() {
        let (mut s, mut r) = builtin_session();
        for _ in 0..180 {
            tick(&mut s, &TickInput::default(), &mut r);
        }
        assert_eq!(s.phase(), SessionPhase::Playing);
        assert_eq!(s.level_index(), 0);
        assert!(s.player().on_ground);
    }

    #[test]
    fn test_actions_before_step() {
        let (mut s, mut r) = builtin_session();
        let events = tick(&mut s, &TickInput::with_action(Action::CycleLevel), &mut r);
        assert_eq!(events.first(), Some(&SessionEvent::LevelLoaded { index: 1 }));
        assert_eq!(s.level_index(), 1);
        // Step ran on the freshly loaded level
        assert_eq!(s.time_ticks, 1);
    }

    #[test]
    fn test_move_dir_reaches_player() {
        let (mut s, mut r) = builtin_session();
        let start_x = s.player().pos.x;
        let input = TickInput {
            move_dir: 1.0,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut s, &input, &mut r);
        }
        assert!(s.player().pos.x > start_x);
    }

    #[test]
    fn test_determinism() {
        // Two sessions fed identical inputs end in identical states
        let (mut s1, mut r1) = builtin_session();
        let (mut s2, mut r2) = builtin_session();

        let inputs = [
            TickInput {
                move_dir: 1.0,
                ..Default::default()
            },
            TickInput {
                move_dir: 1.0,
                actions: vec![Action::Jump],
            },
            TickInput::default(),
            TickInput::with_action(Action::CycleLevel),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut s1, input, &mut r1);
                tick(&mut s2, input, &mut r2);
            }
        }

        assert_eq!(s1.level_index(), s2.level_index());
        assert_eq!(s1.player(), s2.player());
        assert_eq!(s1.time_ticks, s2.time_ticks);
    }
}
