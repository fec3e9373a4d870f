use serde::Deserialize;
use tracing::warn;

use crate::error::{GameError, GameResult};
use crate::params::Params;

/// Game configuration
///
/// Every field defaults to the matching constant in [`Params`], so a TOML
/// override only needs to name the values it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ship_height: f32,
    pub ship_width: f32,
    pub ship_max_speed: f32,
    pub ship_max_rotation: f32,
    pub ship_acceleration: f32,
    pub photon_speed: f32,
    pub photon_radius: f32,
    pub asteroid_size_min: f32,
    pub asteroid_size_max: f32,
    pub asteroid_radius_min: f32,
    pub asteroid_radius_max: f32,
    pub asteroid_speed_max: f32,
    pub asteroid_spin_max: f32,
    pub asteroid_min_vertices: usize,
    pub asteroid_max_vertices: usize, // exclusive
    pub asteroid_collision_margin: f32,
    pub asteroid_points: u32,
    pub tick_dt: f32,
    pub invulnerability_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ship_height: Params::SHIP_HEIGHT,
            ship_width: Params::SHIP_WIDTH,
            ship_max_speed: Params::SHIP_MAX_SPEED,
            ship_max_rotation: Params::SHIP_MAX_ROTATION,
            ship_acceleration: Params::SHIP_ACCELERATION,
            photon_speed: Params::PHOTON_SPEED,
            photon_radius: Params::PHOTON_RADIUS,
            asteroid_size_min: Params::ASTEROID_SIZE_MIN,
            asteroid_size_max: Params::ASTEROID_SIZE_MAX,
            asteroid_radius_min: Params::ASTEROID_RADIUS_MIN,
            asteroid_radius_max: Params::ASTEROID_RADIUS_MAX,
            asteroid_speed_max: Params::ASTEROID_SPEED_MAX,
            asteroid_spin_max: Params::ASTEROID_SPIN_MAX,
            asteroid_min_vertices: Params::ASTEROID_MIN_VERTICES,
            asteroid_max_vertices: Params::MAX_VERTICES,
            asteroid_collision_margin: Params::ASTEROID_COLLISION_MARGIN,
            asteroid_points: Params::ASTEROID_POINTS,
            tick_dt: Params::TICK_DT,
            invulnerability_secs: Params::INVULNERABILITY_SECS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) TOML document and validate the result.
    pub fn from_toml_str(source: &str) -> GameResult<Self> {
        let config: Config = toml::from_str(source)?;
        if let Err(err) = config.validate() {
            warn!(%err, "rejected configuration");
            return Err(err);
        }
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        let positive = [
            ("ship_height", self.ship_height),
            ("ship_width", self.ship_width),
            ("ship_max_speed", self.ship_max_speed),
            ("photon_speed", self.photon_speed),
            ("photon_radius", self.photon_radius),
            ("asteroid_size_min", self.asteroid_size_min),
            ("asteroid_radius_min", self.asteroid_radius_min),
            ("tick_dt", self.tick_dt),
            ("invulnerability_secs", self.invulnerability_secs),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidConfig {
                    field,
                    expected: "finite and > 0",
                });
            }
        }

        let non_negative = [
            ("ship_max_rotation", self.ship_max_rotation),
            ("ship_acceleration", self.ship_acceleration),
            ("asteroid_speed_max", self.asteroid_speed_max),
            ("asteroid_spin_max", self.asteroid_spin_max),
            ("asteroid_collision_margin", self.asteroid_collision_margin),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::InvalidConfig {
                    field,
                    expected: "finite and >= 0",
                });
            }
        }

        if !self.asteroid_size_max.is_finite() || self.asteroid_size_max < self.asteroid_size_min {
            return Err(GameError::InvalidConfig {
                field: "asteroid_size_max",
                expected: "finite and >= asteroid_size_min",
            });
        }
        if !self.asteroid_radius_max.is_finite()
            || self.asteroid_radius_max < self.asteroid_radius_min
        {
            return Err(GameError::InvalidConfig {
                field: "asteroid_radius_max",
                expected: "finite and >= asteroid_radius_min",
            });
        }
        if self.asteroid_min_vertices < 3 {
            return Err(GameError::InvalidConfig {
                field: "asteroid_min_vertices",
                expected: ">= 3",
            });
        }
        if self.asteroid_max_vertices > Params::MAX_VERTICES
            || self.asteroid_max_vertices <= self.asteroid_min_vertices
        {
            return Err(GameError::InvalidConfig {
                field: "asteroid_max_vertices",
                expected: "in (asteroid_min_vertices, MAX_VERTICES]",
            });
        }
        Ok(())
    }
}
