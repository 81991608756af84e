//! Runtime configuration for ships, projectiles, and the arena.
//!
//! Every field has a default from `constants`, so a JSON file only needs
//! the values it overrides.

use std::fs;
use std::path::{Path, PathBuf};

use glam::DVec3;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::BoostRelease;
use crate::types::AssetHandle;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Ship tuning, editable by external tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub move_speed: f64,
    /// Added to `move_speed` while the speed boost is held.
    pub boost_delta: f64,
    pub boost_release: BoostRelease,
    pub vertical_lift: f64,
    pub gun_offset: DVec3,
    /// Seconds between shots.
    pub fire_interval: f64,
    pub fire_sound: Option<AssetHandle>,
    pub mesh: AssetHandle,
    pub collision_radius: f64,
    pub projectile: ProjectileConfig,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            boost_delta: SPEED_BOOST_DELTA,
            boost_release: BoostRelease::default(),
            vertical_lift: VERTICAL_BOOST_LIFT,
            gun_offset: DEFAULT_GUN_OFFSET,
            fire_interval: DEFAULT_FIRE_INTERVAL,
            fire_sound: Some(AssetHandle::new(DEFAULT_FIRE_SOUND)),
            mesh: AssetHandle::new(DEFAULT_SHIP_MESH),
            collision_radius: SHIP_COLLISION_RADIUS,
            projectile: ProjectileConfig::default(),
        }
    }
}

impl ShipConfig {
    /// Speed applied while the speed boost is held.
    pub fn boost_speed(&self) -> f64 {
        self.move_speed + self.boost_delta
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("move_speed", self.move_speed)?;
        non_negative("boost_delta", self.boost_delta)?;
        finite("vertical_lift", self.vertical_lift)?;
        if !self.gun_offset.is_finite() {
            return Err(invalid("gun_offset", "must be finite"));
        }
        positive("fire_interval", self.fire_interval)?;
        non_negative("collision_radius", self.collision_radius)?;
        self.projectile.validate()
    }
}

/// Projectile tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub speed: f64,
    pub lifespan_secs: f64,
    pub radius: f64,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            lifespan_secs: PROJECTILE_LIFESPAN,
            radius: PROJECTILE_RADIUS,
        }
    }
}

impl ProjectileConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("projectile.speed", self.speed)?;
        positive("projectile.lifespan_secs", self.lifespan_secs)?;
        non_negative("projectile.radius", self.radius)
    }
}

/// Arena layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub half_extent: f64,
    pub ceiling: f64,
    pub wall_thickness: f64,
    pub obstacle_count: u32,
    pub player_start: DVec3,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_extent: ARENA_HALF_EXTENT,
            ceiling: ARENA_CEILING,
            wall_thickness: ARENA_WALL_THICKNESS,
            obstacle_count: ARENA_OBSTACLE_COUNT,
            player_start: DVec3::ZERO,
        }
    }
}

impl ArenaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena.half_extent", self.half_extent)?;
        positive("arena.ceiling", self.ceiling)?;
        positive("arena.wall_thickness", self.wall_thickness)?;
        if !self.player_start.is_finite() {
            return Err(invalid("arena.player_start", "must be finite"));
        }
        if self.player_start.x.abs() >= self.half_extent
            || self.player_start.y.abs() >= self.half_extent
        {
            return Err(invalid("arena.player_start", "must lie inside the walls"));
        }
        Ok(())
    }
}

/// Read and deserialize a JSON config file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("must be positive, got {value}"),
        });
    }
    Ok(())
}
