//! The table: owns the balls and advances them one step at a time.
//!
//! A step runs, in order:
//!
//! ```text
//! 1. detect   all ball-ball contacts (lexicographic pairs)
//! 2. resolve  each contact once, in detection order
//! 3. for each ball: integrate (drift + damping), then reflect at rails
//! ```
//!
//! The table never loops on its own. A driver calls [`Table::step`] until
//! [`Table::is_resting`] holds; see [`crate::simulation::Shot`] for the
//! standard one.

use log::{trace, warn};

use crate::collision::{reflect_at_rails, CollisionDetector, CollisionResolver};
use crate::config::{PhysicsConfig, RackConfig};
use crate::error::SimError;
use crate::integrator::Damping;
use crate::types::{Body, Frame, ShotState, Vec2};

/// Index of the cue ball in the body list.
pub const CUE_INDEX: usize = 0;

/// Index of the object ball used by aim planning.
pub const OBJECT_INDEX: usize = 1;

/// Six pockets: bottom left, bottom middle, bottom right, then the same
/// along the top rail.
///
/// Corners sit one radius in from both rails, mid-rail pockets half a
/// radius in from their rail.
pub fn pocket_positions(width: f64, height: f64, radius: f64) -> [Vec2; 6] {
    [
        Vec2::new(radius, radius),
        Vec2::new(width / 2.0, radius / 2.0),
        Vec2::new(width - radius, radius),
        Vec2::new(radius, height - radius),
        Vec2::new(width / 2.0, height - radius / 2.0),
        Vec2::new(width - radius, height - radius),
    ]
}

/// A billiard table for one shot.
#[derive(Debug, Clone)]
pub struct Table {
    config: PhysicsConfig,
    damping: Damping,
    detector: CollisionDetector,
    bodies: Vec<Body>,
    pockets: [Vec2; 6],
    steps: u64,
    contacts: usize,
}

impl Table {
    /// Build a table from a validated config and the balls' initial state.
    ///
    /// Overlapping balls are accepted but logged: keeping the layout clean
    /// is the caller's job.
    pub fn new(config: PhysicsConfig, bodies: Vec<Body>) -> Result<Self, SimError> {
        config.validate()?;

        for (i, body) in bodies.iter().enumerate() {
            if !(body.radius > 0.0) || !(body.mass > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "body {} needs positive radius and mass, got r={} m={}",
                    i, body.radius, body.mass
                )));
            }
        }

        let detector = CollisionDetector::new();
        for pair in detector.overlapping(&bodies) {
            warn!(
                "bodies {} and {} overlap at construction",
                pair.first, pair.second
            );
        }

        Ok(Self {
            damping: config.damping_model(),
            pockets: pocket_positions(config.table_width, config.table_height, config.ball_radius),
            config,
            detector,
            bodies,
            steps: 0,
            contacts: 0,
        })
    }

    /// Build a table with all balls of `rack` at rest.
    pub fn from_rack(config: PhysicsConfig, rack: &RackConfig) -> Result<Self, SimError> {
        let bodies = rack.bodies(&config);
        Self::new(config, bodies)
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn width(&self) -> f64 {
        self.config.table_width
    }

    pub fn height(&self) -> f64 {
        self.config.table_height
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Result<&Body, SimError> {
        self.bodies.get(index).ok_or(SimError::MissingBody {
            index,
            len: self.bodies.len(),
        })
    }

    /// Pockets are part of the table geometry only; the step never
    /// removes a ball.
    pub fn pockets(&self) -> &[Vec2; 6] {
        &self.pockets
    }

    /// Steps executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Ball-ball contacts resolved so far.
    pub fn contacts_resolved(&self) -> usize {
        self.contacts
    }

    /// Apply an impulse to any ball, scaled by the configured `impulse_dt`.
    pub fn apply_impulse(&mut self, index: usize, force: Vec2) -> Result<(), SimError> {
        let len = self.bodies.len();
        let dt = self.config.impulse_dt;
        let body = self
            .bodies
            .get_mut(index)
            .ok_or(SimError::MissingBody { index, len })?;
        body.apply_impulse(force, dt);
        Ok(())
    }

    /// Strike the cue ball.
    pub fn strike(&mut self, force: Vec2) -> Result<(), SimError> {
        self.apply_impulse(CUE_INDEX, force)
    }

    /// True when every ball has exactly zero velocity.
    pub fn is_resting(&self) -> bool {
        self.bodies.iter().all(Body::is_at_rest)
    }

    pub fn state(&self) -> ShotState {
        if self.is_resting() {
            ShotState::Resting
        } else {
            ShotState::Moving
        }
    }

    /// Advance the whole table by one step.
    ///
    /// A resting table is left untouched. Fails if a detected contact
    /// cannot be resolved or the configured step limit is reached; the
    /// table is not rolled back in either case.
    pub fn step(&mut self) -> Result<ShotState, SimError> {
        if self.is_resting() {
            return Ok(ShotState::Resting);
        }

        if let Some(limit) = self.config.max_steps {
            if self.steps >= limit {
                return Err(SimError::StepLimitExceeded { limit });
            }
        }

        let pairs = self.detector.detect(&self.bodies);
        self.contacts += CollisionResolver::resolve_all(&mut self.bodies, &pairs)?;

        let (width, height) = (self.config.table_width, self.config.table_height);
        for body in self.bodies.iter_mut() {
            body.integrate(&self.damping);
            reflect_at_rails(body, width, height);
        }

        self.steps += 1;
        let state = self.state();
        trace!(
            "step {}: {} contacts, state {:?}",
            self.steps,
            pairs.len(),
            state
        );
        Ok(state)
    }

    /// Snapshot of every ball for the renderer.
    pub fn frame(&self) -> Frame {
        Frame::capture(self.steps, &self.bodies)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

// =============================================================================
// Tests
// =============================================================================
