//! Procedural platform layouts
//!
//! Pure and deterministic: the same parameters always produce the same
//! platforms in the same order (ground, stairs, then obstacles in input order).

use serde::{Deserialize, Serialize};

use super::platform::PlatformDesc;
use crate::consts::{DIAGONAL_RISE, DIAGONAL_WIDTH, FLOATING_WIDTH, GROUND_HEIGHT, STEP_THICKNESS};

/// Obstacle pattern selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    /// Horizontal line of small platforms
    Floating,
    /// Platforms stepping up and to the right
    Diagonal,
    /// Anything unrecognised; generates nothing
    #[default]
    #[serde(other)]
    Unknown,
}

/// One obstacle pattern
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Obstacle {
    #[serde(rename = "type")]
    pub kind: ObstacleKind,
    pub count: f32,
    pub start_x: f32,
    pub spacing: f32,
    pub offset_y: f32,
}

/// Parameters for a generated level
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationParams {
    pub ground_y: f32,
    pub ground_width: f32,
    pub stair_count: f32,
    pub stair_start: f32,
    pub stair_width: f32,
    pub gap_width: f32,
    pub stair_height: f32,
    pub obstacles: Vec<Obstacle>,
}

/// Loop indices `0, 1, 2, ..` while below `count`, as floats.
/// Negative and NaN counts yield nothing; fractional counts round up.
fn steps(count: f32) -> impl Iterator<Item = f32> {
    (0u32..).map(|i| i as f32).take_while(move |&i| i < count)
}

impl GenerationParams {
    /// Number of platforms `generate` will emit
    pub fn platform_count(&self) -> usize {
        let obstacles: usize = self
            .obstacles
            .iter()
            .filter(|o| o.kind != ObstacleKind::Unknown)
            .map(|o| steps(o.count).count())
            .sum();
        1 + steps(self.stair_count).count() + obstacles
    }
}

/// Turn generation parameters into an ordered platform list
pub fn generate(params: &GenerationParams) -> Vec<PlatformDesc> {
    let mut platforms = Vec::new();

    // Ground
    platforms.push(PlatformDesc::new(
        0.0,
        params.ground_y,
        params.ground_width,
        GROUND_HEIGHT,
    ));

    // Ascending stairs
    for step in steps(params.stair_count) {
        platforms.push(PlatformDesc::new(
            params.stair_start + step * (params.stair_width + params.gap_width),
            params.ground_y - (step + 1.0) * params.stair_height,
            params.stair_width,
            STEP_THICKNESS,
        ));
    }

    for obstacle in &params.obstacles {
        match obstacle.kind {
            ObstacleKind::Floating => {
                platforms.extend(steps(obstacle.count).map(|i| {
                    PlatformDesc::new(
                        obstacle.start_x + i * obstacle.spacing,
                        obstacle.offset_y,
                        FLOATING_WIDTH,
                        STEP_THICKNESS,
                    )
                }));
            }
            ObstacleKind::Diagonal => {
                platforms.extend(steps(obstacle.count).map(|i| {
                    PlatformDesc::new(
                        obstacle.start_x + i * obstacle.spacing,
                        obstacle.offset_y - i * DIAGONAL_RISE,
                        DIAGONAL_WIDTH,
                        STEP_THICKNESS,
                    )
                }));
            }
            ObstacleKind::Unknown => {
                log::debug!("Skipping obstacle with unrecognised type");
            }
        }
    }

    platforms
}
