//! Physics and rack configuration.
//!
//! Every physical constant the step uses lives in [`PhysicsConfig`], so
//! several tables with different settings can coexist. Configurations can be
//! built in code or loaded from YAML files:
//!
//! ## Directory Structure
//!
//! ```text
//! configs/
//! ├── tables/
//! │   ├── standard.yaml
//! │   └── ...
//! └── racks/
//!     ├── three_ball.yaml
//!     └── ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SimError};
use crate::integrator::Damping;
use crate::types::{constants, Body, Vec2};

/// Physical constants for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub ball_radius: f64,
    pub ball_mass: f64,
    pub table_width: f64,
    pub table_height: f64,
    /// Velocity multiplier per step
    pub damping: f64,
    /// Speeds below this snap to zero
    pub rest_speed: f64,
    /// How long the cue force acts for
    pub impulse_dt: f64,
    /// Abort a shot that has not come to rest after this many steps
    pub max_steps: Option<u64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            ball_radius: constants::BALL_RADIUS,
            ball_mass: 1.0,
            table_width: constants::TABLE_WIDTH,
            table_height: constants::TABLE_HEIGHT,
            damping: constants::DAMPING,
            rest_speed: constants::REST_SPEED,
            impulse_dt: constants::IMPULSE_DT,
            max_steps: None,
        }
    }
}

impl PhysicsConfig {
    pub fn damping_model(&self) -> Damping {
        Damping::new(self.damping, self.rest_speed)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("ball_radius", self.ball_radius),
            ("ball_mass", self.ball_mass),
            ("table_width", self.table_width),
            ("table_height", self.table_height),
            ("impulse_dt", self.impulse_dt),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }

        if !(self.rest_speed >= 0.0 && self.rest_speed.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "rest_speed must be non-negative, got {}",
                self.rest_speed
            )));
        }

        if self.max_steps == Some(0) {
            return Err(SimError::InvalidConfig(
                "max_steps must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Initial placement of one ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallPlacement {
    pub position: [f64; 2],
    pub tag: String,
}

/// Initial layout of the balls for a shot. The first ball is the cue ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RackConfig {
    pub name: String,
    pub balls: Vec<BallPlacement>,
}

impl RackConfig {
    /// Bodies at rest, sized and weighed per `physics`.
    pub fn bodies(&self, physics: &PhysicsConfig) -> Vec<Body> {
        self.balls
            .iter()
            .map(|ball| {
                Body::at_rest(Vec2::from(ball.position), physics.ball_radius, ball.tag.clone())
                    .with_mass(physics.ball_mass)
            })
            .collect()
    }

    /// The reference three-ball layout on the standard table.
    pub fn three_ball() -> Self {
        let w = constants::TABLE_WIDTH;
        let h = constants::TABLE_HEIGHT;
        Self {
            name: "three_ball".to_string(),
            balls: vec![
                BallPlacement {
                    position: [w * 3.0 / 5.0, h * 4.0 / 5.0],
                    tag: "w".to_string(),
                },
                BallPlacement {
                    position: [w / 2.0, h / 5.0],
                    tag: "r".to_string(),
                },
                BallPlacement {
                    position: [w * 3.0 / 5.0, h / 2.0],
                    tag: "k".to_string(),
                },
            ],
        }
    }
}

/// Config loader with configurable base directory.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a new loader with the given base path.
    ///
    /// The base path should contain `tables/` and `racks/` subdirectories.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load and validate a table configuration by name (without .yaml).
    ///
    /// # Example
    /// ```ignore
    /// let loader = ConfigLoader::new("configs");
    /// let physics = loader.load_table("standard")?;
    /// ```
    pub fn load_table(&self, name: &str) -> Result<PhysicsConfig, ConfigError> {
        let config: PhysicsConfig = self.load_yaml("tables", name)?;
        config
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("{}: {}", name, e)))?;
        Ok(config)
    }

    /// Load a rack by name.
    pub fn load_rack(&self, name: &str) -> Result<RackConfig, ConfigError> {
        let rack: RackConfig = self.load_yaml("racks", name)?;
        if rack.balls.is_empty() {
            return Err(ConfigError::Invalid(format!("rack {} has no balls", name)));
        }
        Ok(rack)
    }

    /// List all available tables.
    pub fn list_tables(&self) -> Result<Vec<String>, ConfigError> {
        self.list_configs("tables")
    }

    /// List all available racks.
    pub fn list_racks(&self) -> Result<Vec<String>, ConfigError> {
        self.list_configs("racks")
    }

    fn load_yaml<T: serde::de::DeserializeOwned>(
        &self,
        subdir: &str,
        name: &str,
    ) -> Result<T, ConfigError> {
        let path = self.base_path.join(subdir).join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(ConfigError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    fn list_configs(&self, subdir: &str) -> Result<Vec<String>, ConfigError> {
        let path = self.base_path.join(subdir);
        if !path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if let Some(stem) = name.strip_suffix(".yaml") {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================
