//! Level file format and loading
//!
//! Levels live in a JSON document `{ "levels": [ ... ] }`. Every field of a
//! level is optional; [`LevelRecord::resolve`] fills the gaps with defaults
//! once, so nothing downstream needs to null-check.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::renderer::{Color, parse_hex_color};
use crate::sim::{Circle, GenerationParams, PlatformDesc, Theme};

/// Level pack shipped with the binary
const BUILTIN_LEVELS: &str = include_str!("../assets/levels.json");

/// Theme colours as written in level data (CSS hex strings)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeRecord {
    pub bg: Option<String>,
    pub platform: Option<String>,
    pub blob: Option<String>,
}

/// A point with an optional radius, each field independently optional
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub r: Option<f32>,
}

/// One level exactly as it appears in the level file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecord {
    pub name: Option<String>,
    pub gravity: Option<f32>,
    #[serde(rename = "jumpV")]
    pub jump_velocity: Option<f32>,
    pub theme: Option<ThemeRecord>,
    pub start: Option<PointRecord>,
    pub goal_x: Option<f32>,
    pub goal_y: Option<f32>,
    pub goal_radius: Option<f32>,
    pub level_type: Option<String>,
    pub generation_params: Option<GenerationParams>,
    pub platforms: Option<Vec<PlatformDesc>>,
}

/// Where a level's platforms come from, decided once at load
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformSource {
    Literal(Vec<PlatformDesc>),
    Generated(GenerationParams),
}

/// A level record with every default applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLevel {
    pub name: String,
    pub theme: Theme,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub start: Circle,
    pub goal: Circle,
    pub source: PlatformSource,
}

fn resolve_color(value: Option<&str>, fallback: &str) -> Color {
    let default = parse_hex_color(fallback).unwrap_or([0.0, 0.0, 0.0, 1.0]);
    match value {
        None => default,
        Some(s) => parse_hex_color(s).unwrap_or_else(|| {
            log::warn!("Unrecognised colour {:?}, using {}", s, fallback);
            default
        }),
    }
}

impl ThemeRecord {
    fn resolve(&self) -> Theme {
        Theme {
            background: resolve_color(self.bg.as_deref(), DEFAULT_BACKGROUND),
            platform: resolve_color(self.platform.as_deref(), DEFAULT_PLATFORM_COLOR),
            actor: resolve_color(self.blob.as_deref(), DEFAULT_ACTOR_COLOR),
        }
    }
}

impl LevelRecord {
    /// Generation wins over a literal list when both are present
    pub fn platform_source(&self) -> PlatformSource {
        match (&self.level_type, &self.generation_params) {
            (Some(kind), Some(params)) if kind == "generated" => {
                PlatformSource::Generated(params.clone())
            }
            _ => PlatformSource::Literal(self.platforms.clone().unwrap_or_default()),
        }
    }

    /// Merge with defaults field by field
    pub fn resolve(&self) -> ResolvedLevel {
        let name = self
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_LEVEL_NAME)
            .to_string();

        let start = self.start.unwrap_or_default();
        let (sx, sy, sr) = DEFAULT_START;
        let (gx, gy, gr) = DEFAULT_GOAL;

        ResolvedLevel {
            name,
            theme: self.theme.clone().unwrap_or_default().resolve(),
            gravity: self.gravity.unwrap_or(DEFAULT_GRAVITY),
            jump_velocity: self.jump_velocity.unwrap_or(DEFAULT_JUMP_VELOCITY),
            start: Circle::new(
                Vec2::new(start.x.unwrap_or(sx), start.y.unwrap_or(sy)),
                start.r.unwrap_or(sr),
            ),
            goal: Circle::new(
                Vec2::new(self.goal_x.unwrap_or(gx), self.goal_y.unwrap_or(gy)),
                self.goal_radius.unwrap_or(gr),
            ),
            source: self.platform_source(),
        }
    }
}

/// On-disk document shape
#[derive(Deserialize)]
struct LevelFile {
    levels: Vec<LevelRecord>,
}

/// The ordered, non-empty list of levels for a run
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSet {
    levels: Vec<LevelRecord>,
}

impl LevelSet {
    pub fn new(levels: Vec<LevelRecord>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        Ok(Self { levels })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: LevelFile = serde_json::from_str(json)?;
        Self::new(file.levels)
    }

    /// Load a level file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let set = Self::from_json_str(&contents)?;
        log::info!("Loaded {} levels from {}", set.len(), path.display());
        Ok(set)
    }

    /// The level pack compiled into the crate
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json_str(BUILTIN_LEVELS)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Record at `index`; panics if `index >= len()`
    pub fn record(&self, index: usize) -> &LevelRecord {
        &self.levels[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelRecord> {
        self.levels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::rgb;

    #[test]
    fn test_empty_record_gets_all_defaults() {
        let level = LevelRecord::default().resolve();
        assert_eq!(level.name, "Level");
        assert_eq!(level.gravity, 0.65);
        assert_eq!(level.jump_velocity, -11.0);
        assert_eq!(level.start, Circle::new(Vec2::new(80.0, 180.0), 26.0));
        assert_eq!(level.goal, Circle::new(Vec2::ZERO, 20.0));
        assert_eq!(level.theme, Theme::default());
        assert_eq!(level.source, PlatformSource::Literal(Vec::new()));
    }

    #[test]
    fn test_theme_merges_field_by_field() {
        let record: LevelRecord =
            serde_json::from_str(r##"{"theme": {"bg": "#101010"}}"##).unwrap();
        let theme = record.resolve().theme;
        assert_eq!(theme.background, rgb(16, 16, 16));
        assert_eq!(theme.platform, Theme::default().platform);
        assert_eq!(theme.actor, Theme::default().actor);
    }

    #[test]
    fn test_bad_colour_falls_back() {
        let record: LevelRecord =
            serde_json::from_str(r#"{"theme": {"blob": "not-a-colour"}}"#).unwrap();
        assert_eq!(record.resolve().theme.actor, Theme::default().actor);
    }

    #[test]
    fn test_partial_start_and_goal() {
        let record: LevelRecord =
            serde_json::from_str(r#"{"start": {"y": 300}, "goalX": 700, "goalRadius": 30}"#)
                .unwrap();
        let level = record.resolve();
        assert_eq!(level.start, Circle::new(Vec2::new(80.0, 300.0), 26.0));
        assert_eq!(level.goal, Circle::new(Vec2::new(700.0, 0.0), 30.0));
    }

    #[test]
    fn test_empty_name_uses_default() {
        let record = LevelRecord {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.resolve().name, "Level");
    }

    #[test]
    fn test_generation_wins_over_literal() {
        let record: LevelRecord = serde_json::from_str(
            r#"{
                "levelType": "generated",
                "generationParams": {"groundY": 400, "groundWidth": 600},
                "platforms": [{"x": 0, "y": 0, "w": 10, "h": 10}]
            }"#,
        )
        .unwrap();
        assert!(matches!(record.platform_source(), PlatformSource::Generated(_)));
    }

    #[test]
    fn test_params_without_generated_type_stay_literal() {
        let record: LevelRecord = serde_json::from_str(
            r#"{
                "generationParams": {"groundY": 400, "groundWidth": 600},
                "platforms": [{"x": 0, "y": 0, "w": 10, "h": 10}]
            }"#,
        )
        .unwrap();
        assert_eq!(
            record.platform_source(),
            PlatformSource::Literal(vec![PlatformDesc::new(0.0, 0.0, 10.0, 10.0)])
        );
    }

    #[test]
    fn test_level_set_rejects_empty() {
        assert!(matches!(
            LevelSet::from_json_str(r#"{"levels": []}"#),
            Err(ConfigError::NoLevels)
        ));
        assert!(matches!(
            LevelSet::from_json_str("{ nope"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            LevelSet::load(Path::new("/definitely/not/here.json")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_odd_generation_counts_still_load() {
        let set = LevelSet::from_json_str(
            r#"{"levels": [
                {"levelType": "generated",
                 "generationParams": {"groundWidth": 500, "stairCount": -1}},
                {"levelType": "generated",
                 "generationParams": {"groundWidth": 500, "stairCount": 3.0}}
            ]}"#,
        )
        .unwrap();
        let counts: Vec<usize> = set
            .iter()
            .map(|l| match l.platform_source() {
                PlatformSource::Generated(p) => crate::sim::generate(&p).len(),
                PlatformSource::Literal(_) => 0,
            })
            .collect();
        assert_eq!(counts, vec![1, 4]);
    }

    #[test]
    fn test_builtin_pack_loads() {
        let set = LevelSet::builtin().unwrap();
        assert!(set.len() >= 2);
        assert!(
            set.iter()
                .any(|l| matches!(l.platform_source(), PlatformSource::Generated(_)))
        );
    }
}
