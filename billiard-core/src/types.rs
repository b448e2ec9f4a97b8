//! Core types for the billiard simulation.
//!
//! Units are table units (the reference table is 254 x 127, roughly
//! centimetres) and steps:
//! - Position: table units
//! - Velocity: table units per step
//! - Mass: arbitrary, only ratios matter

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::integrator::Damping;

// =============================================================================
// Vec2 - 2D Vector
// =============================================================================

/// A 2D vector used for positions, velocities, forces and impulses.
///
/// Coordinate system:
/// - X: along the table length, 0 at the left rail
/// - Y: along the table width, 0 at the bottom rail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns a unit vector in the same direction, or `None` for a
    /// (near) zero vector.
    pub fn normalized(&self) -> Option<Self> {
        let mag = self.magnitude();
        if mag < constants::EPSILON {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// True only when both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).magnitude()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

// =============================================================================
// Body
// =============================================================================

/// One ball on the table.
///
/// `tag` is carried through to snapshots for the renderer; physics never
/// looks at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    pub mass: f64,
    pub tag: String,
}

impl Body {
    /// Ball at rest at a given position, unit mass.
    pub fn at_rest(position: Vec2, radius: f64, tag: impl Into<String>) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            mass: 1.0,
            tag: tag.into(),
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Strike the ball: `velocity += force * dt`.
    pub fn apply_impulse(&mut self, force: Vec2, dt: f64) {
        self.velocity += force * dt;
    }

    /// Advance one unit step and apply rolling friction.
    pub fn integrate(&mut self, damping: &Damping) {
        damping.step(self);
    }

    /// Rest means exactly zero on both axes, not "slow".
    pub fn is_at_rest(&self) -> bool {
        self.velocity.is_zero()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }
}

// =============================================================================
// Shot State
// =============================================================================

/// Shot-level state machine. `Resting` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotState {
    Moving,
    Resting,
}

// =============================================================================
// Snapshots
// =============================================================================

/// Position and tag of one ball at a given step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub tag: String,
    pub position: Vec2,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub step: u64,
    pub balls: Vec<BallSnapshot>,
}

impl Frame {
    pub fn capture(step: u64, bodies: &[Body]) -> Self {
        Self {
            step,
            balls: bodies
                .iter()
                .map(|b| BallSnapshot {
                    tag: b.tag.clone(),
                    position: b.position,
                })
                .collect(),
        }
    }
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Defaults for the reference table. Use [`crate::config::PhysicsConfig`]
/// to override them.
pub mod constants {
    /// Standard ball diameter is 5.73
    pub const BALL_RADIUS: f64 = 5.73 / 2.0;

    pub const TABLE_WIDTH: f64 = 254.0;

    pub const TABLE_HEIGHT: f64 = 127.0;

    /// Velocity multiplier applied every step
    pub const DAMPING: f64 = 0.999;

    /// Speeds below this snap to zero
    pub const REST_SPEED: f64 = 0.01;

    /// Duration the cue force acts for
    pub const IMPULSE_DT: f64 = 0.1;

    /// Small value for floating-point comparisons
    pub const EPSILON: f64 = 1e-10;
}

// =============================================================================
// Tests
// =============================================================================
