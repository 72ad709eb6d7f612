//! Game configuration.
//!
//! [`GameConfig::default`] reproduces the stock tuning. Any subset of fields
//! can be overridden from JSON; missing fields fall back to their defaults.
//!
//! ```
//! use horde_game::config::GameConfig;
//!
//! let json = r#"{ "spawner": { "interval": 2.5 }, "seed": 7 }"#;
//! let config = GameConfig::from_json_str(json).unwrap();
//! assert_eq!(config.spawner.interval, 2.5);
//! assert_eq!(config.monster.xp_reward, 10);
//! assert_eq!(config.seed, Some(7));
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::components::{Color, Position, Renderable, Stats, Weapon};
use crate::view::Viewport;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced while loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON did not match the config schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its allowed domain.
    #[error("invalid config value for '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Frame clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Largest elapsed time, in seconds, a single frame may represent.
    pub max_dt: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { max_dt: 0.1 }
    }
}

/// Initial player bundle and movement speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub position: Position,
    /// Movement speed in units per second.
    pub speed: f64,
    pub renderable: Renderable,
    pub stats: Stats,
    pub weapon: Weapon,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            position: Position {
                x: 1000.0,
                y: 1000.0,
            },
            speed: 200.0,
            renderable: Renderable {
                color: Color::GREEN,
                radius: 20.0,
            },
            stats: Stats {
                health_current: 100,
                health_max: 100,
                xp_current: 0,
                xp_to_next: 100,
                level: 1,
            },
            weapon: Weapon {
                damage: 25,
                attack_cooldown: 1.0,
                cooldown_remaining: 0.0,
                range: 50.0,
            },
        }
    }
}

/// Monster spawn cadence and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Seconds between spawns.
    pub interval: f64,
    /// Extra distance beyond half the larger viewport side.
    pub spawn_distance: f64,
    /// Nominal viewport used until the presentation layer reports a real one.
    pub viewport: Viewport,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            interval: 5.0,
            spawn_distance: 400.0,
            viewport: Viewport {
                width: 1920.0,
                height: 1080.0,
            },
        }
    }
}

/// The bundle given to every spawned monster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterConfig {
    pub health: u32,
    pub speed: f64,
    pub xp_reward: u32,
    pub renderable: Renderable,
}

impl Default for MonsterConfig {
    fn default() -> Self {
        Self {
            health: 50,
            speed: 100.0,
            xp_reward: 10,
            renderable: Renderable {
                color: Color::RED,
                radius: 15.0,
            },
        }
    }
}

/// Level-up curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Multiplier on max health per level (result rounded down).
    pub health_growth: f64,
    /// Multiplier on weapon damage per level (result rounded down).
    pub damage_growth: f64,
    /// Multiplier on attack cooldown per level.
    pub cooldown_factor: f64,
    /// Attack cooldown never shrinks below this many seconds.
    pub min_cooldown: f64,
    /// `xp_to_next = xp_per_level * level`.
    pub xp_per_level: u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            health_growth: 1.2,
            damage_growth: 1.1,
            cooldown_factor: 0.95,
            min_cooldown: 0.1,
            xp_per_level: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// GameConfig
// ---------------------------------------------------------------------------

/// Top-level configuration for a [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub frame: FrameConfig,
    pub player: PlayerConfig,
    pub spawner: SpawnerConfig,
    pub monster: MonsterConfig,
    pub progression: ProgressionConfig,
    /// Seed for the spawner's RNG. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check every value is inside its domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        duration("frame.max_dt", self.frame.max_dt)?;

        let p = &self.player;
        finite("player.position.x", p.position.x)?;
        finite("player.position.y", p.position.y)?;
        positive("player.speed", p.speed)?;
        positive("player.weapon.attack_cooldown", p.weapon.attack_cooldown)?;
        positive("player.weapon.range", p.weapon.range)?;
        if !(0.0..=p.weapon.attack_cooldown).contains(&p.weapon.cooldown_remaining) {
            return Err(invalid(
                "player.weapon.cooldown_remaining",
                format!(
                    "must be within [0, {}], got {}",
                    p.weapon.attack_cooldown, p.weapon.cooldown_remaining
                ),
            ));
        }
        if p.stats.health_current > p.stats.health_max {
            return Err(invalid(
                "player.stats.health_current",
                format!("exceeds health_max ({})", p.stats.health_max),
            ));
        }
        if p.stats.xp_to_next == 0 {
            return Err(invalid("player.stats.xp_to_next", "must be non-zero".to_owned()));
        }

        let s = &self.spawner;
        duration("spawner.interval", s.interval)?;
        non_negative("spawner.spawn_distance", s.spawn_distance)?;
        positive("spawner.viewport.width", s.viewport.width)?;
        positive("spawner.viewport.height", s.viewport.height)?;

        if self.monster.health == 0 {
            return Err(invalid("monster.health", "must be non-zero".to_owned()));
        }
        positive("monster.speed", self.monster.speed)?;

        let g = &self.progression;
        positive("progression.health_growth", g.health_growth)?;
        positive("progression.damage_growth", g.damage_growth)?;
        positive("progression.cooldown_factor", g.cooldown_factor)?;
        positive("progression.min_cooldown", g.min_cooldown)?;
        if g.xp_per_level == 0 {
            return Err(invalid("progression.xp_per_level", "must be non-zero".to_owned()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite, got {value}")))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

/// Positive, and representable as a non-zero [`Duration`].
fn duration(field: &'static str, value: f64) -> Result<(), ConfigError> {
    positive(field, value)?;
    match Duration::try_from_secs_f64(value) {
        Ok(d) if !d.is_zero() => Ok(()),
        Ok(_) => Err(invalid(field, format!("shorter than one nanosecond: {value}"))),
        Err(e) => Err(invalid(field, format!("not a valid duration ({e}): {value}"))),
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must not be negative, got {value}")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn defaults_match_stock_tuning() {
        let c = GameConfig::default();
        assert_eq!(c.frame.max_dt, 0.1);
        assert_eq!(
            c.player.position,
            Position {
                x: 1000.0,
                y: 1000.0,
            }
        );
        assert_eq!(c.player.speed, 200.0);
        assert_eq!(c.player.weapon.damage, 25);
        assert_eq!(c.player.weapon.range, 50.0);
        assert_eq!(c.player.stats.level, 1);
        assert_eq!(c.spawner.interval, 5.0);
        assert_eq!(c.monster.health, 50);
        assert_eq!(c.progression.xp_per_level, 100);
        assert_eq!(c.seed, None);
    }

    #[test]
    fn empty_json_gives_defaults() {
        let c = GameConfig::from_json_str("{}").unwrap();
        assert_eq!(c, GameConfig::default());
    }

    #[test]
    fn partial_override_keeps_sibling_defaults() {
        let json = r#"{
            "player": {
                "weapon": {
                    "damage": 40,
                    "attack_cooldown": 0.5,
                    "cooldown_remaining": 0.0,
                    "range": 80.0
                }
            }
        }"#;
        let c = GameConfig::from_json_str(json).unwrap();
        assert_eq!(c.player.weapon.damage, 40);
        assert_eq!(c.player.speed, 200.0);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn non_positive_interval_rejected() {
        let err = GameConfig::from_json_str(r#"{ "spawner": { "interval": 0.0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "spawner.interval"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn interval_too_long_for_duration_rejected() {
        let mut c = GameConfig::default();
        c.spawner.interval = 1e20;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Invalid { field: "spawner.interval", .. })
        ));
    }

    #[test]
    fn interval_below_one_nanosecond_rejected() {
        let mut c = GameConfig::default();
        c.spawner.interval = 1e-12;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Invalid { field: "spawner.interval", .. })
        ));
    }

    #[test]
    fn max_dt_too_long_for_duration_rejected() {
        let mut c = GameConfig::default();
        c.frame.max_dt = 1e20;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Invalid { field: "frame.max_dt", .. })
        ));
    }

    #[test]
    fn zero_xp_per_level_rejected() {
        let mut c = GameConfig::default();
        c.progression.xp_per_level = 0;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Invalid { field: "progression.xp_per_level", .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
