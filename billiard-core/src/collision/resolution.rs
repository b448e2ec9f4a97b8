//! Elastic collision response between two balls.
//!
//! Uses the closed-form 2D elastic collision, expressed relative to ball A:
//!
//! ```text
//!   Δp = pos_b - pos_a
//!   Δv = vel_b - vel_a
//!   J  = (Δp·Δv / Δp·Δp) Δp
//!
//!   vel_a += 2 m_b / (m_a + m_b) * J
//!   vel_b -= 2 m_a / (m_a + m_b) * J
//! ```
//!
//! For equal masses both factors are exactly 1 and the update reduces to
//! `vel_a += J`, `vel_b -= J`. Only the velocity component along the line of
//! centres changes, so tangential motion passes through untouched.
//!
//! ## Precondition
//!
//! The pair must be approaching (`Δp·Δv < 0`). Resolving a separating pair
//! would pull the balls back into each other, so that case is reported as
//! [`SimError::InvariantViolation`] instead of being applied.

use log::debug;

use super::detection::ContactPair;
use crate::error::SimError;
use crate::types::{constants, Body, Vec2};

/// Collision resolver for ball-ball contacts.
pub struct CollisionResolver;

impl CollisionResolver {
    /// Resolve a contact between two bodies held outside a table.
    ///
    /// Errors report the pair as `(0, 1)`.
    pub fn resolve(a: &mut Body, b: &mut Body) -> Result<(), SimError> {
        Self::exchange(a, b, 0, 1)
    }

    /// Resolve one detected contact in place.
    pub fn resolve_pair(bodies: &mut [Body], pair: ContactPair) -> Result<(), SimError> {
        let ContactPair { first, second } = pair;
        let len = bodies.len();
        if second >= len {
            return Err(SimError::MissingBody { index: second, len });
        }

        let (head, tail) = bodies.split_at_mut(second);
        Self::exchange(&mut head[first], &mut tail[0], first, second)
    }

    /// Resolve every contact once, in the order given.
    ///
    /// Later pairs see the velocities produced by earlier ones. Stops at
    /// the first failure. Returns the number of contacts resolved.
    pub fn resolve_all(bodies: &mut [Body], pairs: &[ContactPair]) -> Result<usize, SimError> {
        for pair in pairs {
            Self::resolve_pair(bodies, *pair)?;
        }
        Ok(pairs.len())
    }

    fn exchange(a: &mut Body, b: &mut Body, first: usize, second: usize) -> Result<(), SimError> {
        let pos_diff = b.position - a.position;
        let vel_diff = b.velocity - a.velocity;

        let dist_sq = pos_diff.magnitude_squared();
        if dist_sq < constants::EPSILON {
            return Err(SimError::DegenerateGeometry {
                context: format!("bodies {} and {} share a centre", first, second),
            });
        }

        let approach = pos_diff.dot(&vel_diff);
        if approach >= 0.0 {
            return Err(SimError::InvariantViolation {
                first,
                second,
                approach,
            });
        }

        let impulse: Vec2 = pos_diff * (approach / dist_sq);
        let total_mass = a.mass + b.mass;

        a.velocity += impulse * (2.0 * b.mass / total_mass);
        b.velocity -= impulse * (2.0 * a.mass / total_mass);

        debug!(
            "resolved contact {}-{}: v{} = ({:.4}, {:.4}), v{} = ({:.4}, {:.4})",
            first, second, first, a.velocity.x, a.velocity.y, second, b.velocity.x, b.velocity.y
        );

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
