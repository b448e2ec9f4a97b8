//! # Billiard Core
//!
//! Elastic collision simulation for billiard balls on a rectangular table.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec2, Body, frames)
//! - `integrator`: Per-step drift and rolling friction
//! - `collision`: Ball-ball detection and resolution, rail reflection
//! - `table`: Owns the balls and runs one step at a time
//! - `simulation`: Shot driver that steps a table to rest
//! - `config`: Physics constants and rack layouts, loadable from YAML
//! - `aim`: Ghost-ball shot planning
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use billiard_core::{PhysicsConfig, RackConfig, Shot, Table, Vec2};
//!
//! let table = Table::from_rack(PhysicsConfig::default(), &RackConfig::three_ball())?;
//! let report = Shot::new(table).with_stride(40).run(Vec2::new(5.0, 0.0))?;
//! assert!(report.steps > 0);
//! # Ok::<(), billiard_core::SimError>(())
//! ```

pub mod aim;
pub mod collision;
pub mod config;
pub mod error;
pub mod integrator;
pub mod simulation;
pub mod table;
pub mod types;

pub use aim::{plan_shot, AimParams, AimSolution};
pub use config::{BallPlacement, ConfigLoader, PhysicsConfig, RackConfig};
pub use error::{ConfigError, SimError};
pub use simulation::{Shot, ShotReport};
pub use table::Table;
pub use types::{Body, Frame, ShotState, Vec2};
