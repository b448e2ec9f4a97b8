//! Kinematic update for a single ball.
//!
//! The table advances in unit steps, so integration is a plain explicit
//! Euler drift followed by multiplicative damping:
//!
//! ```text
//! 1. x_new = x + v
//! 2. v_new = v * factor
//! 3. if |v_new| < rest_speed: v_new = 0
//! ```
//!
//! Step 3 is what lets a shot end. Without it the speed would only decay
//! geometrically and never reach exactly zero.

use crate::types::{constants, Body, Vec2};

/// Rolling friction model: flat per-step decay with a snap-to-rest threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damping {
    /// Velocity multiplier per step, in (0, 1]
    pub factor: f64,
    /// Speeds strictly below this become exactly zero
    pub rest_speed: f64,
}

impl Default for Damping {
    fn default() -> Self {
        Self {
            factor: constants::DAMPING,
            rest_speed: constants::REST_SPEED,
        }
    }
}

impl Damping {
    pub fn new(factor: f64, rest_speed: f64) -> Self {
        Self { factor, rest_speed }
    }

    /// Advance the body by one unit step.
    pub fn step(&self, body: &mut Body) {
        body.position += body.velocity;
        body.velocity = body.velocity * self.factor;

        if body.velocity.magnitude() < self.rest_speed {
            body.velocity = Vec2::ZERO;
        }
    }

    /// Upper bound on the steps a body moving at `speed` needs to come to
    /// rest, ignoring collisions.
    pub fn steps_to_rest(&self, speed: f64) -> u64 {
        if speed < self.rest_speed {
            return 0;
        }
        if self.factor >= 1.0 {
            return u64::MAX;
        }
        let n = (self.rest_speed / speed).ln() / self.factor.ln();
        n.ceil().max(1.0) as u64 + 1
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(vx: f64, vy: f64) -> Body {
        Body::at_rest(Vec2::new(100.0, 50.0), constants::BALL_RADIUS, "w")
            .with_velocity(Vec2::new(vx, vy))
    }

    #[test]
    fn test_position_advances_by_velocity() {
        let mut body = ball(2.0, -1.0);
        body.integrate(&Damping::default());

        assert!((body.position.x - 102.0).abs() < 1e-12);
        assert!((body.position.y - 49.0).abs() < 1e-12);
        assert!((body.velocity.x - 1.998).abs() < 1e-12);
        assert!((body.velocity.y + 0.999).abs() < 1e-12);
    }

    #[test]
    fn test_snap_to_zero_below_threshold() {
        let mut body = ball(0.01, 0.0);
        body.integrate(&Damping::default());

        // 0.01 * 0.999 < 0.01
        assert!(body.is_at_rest());
        assert!((body.position.x - 100.01).abs() < 1e-12);
    }

    #[test]
    fn test_speed_decreases_monotonically_until_rest() {
        let damping = Damping::default();
        let mut body = ball(0.05, 0.02);
        let mut previous = body.speed();
        let mut steps = 0;

        while !body.is_at_rest() {
            body.integrate(&damping);
            let speed = body.speed();
            assert!(speed < previous, "speed went from {} to {}", previous, speed);
            previous = speed;
            steps += 1;
            assert!(steps < 10_000, "body never came to rest");
        }

        for _ in 0..10 {
            body.integrate(&damping);
            assert!(body.is_at_rest());
        }
    }

    #[test]
    fn test_steps_to_rest_bounds_actual_steps() {
        let damping = Damping::default();
        let mut body = ball(1.0, 0.0);
        let bound = damping.steps_to_rest(body.speed());

        let mut steps = 0;
        while !body.is_at_rest() {
            body.integrate(&damping);
            steps += 1;
        }

        assert!(steps <= bound, "took {} steps, bound was {}", steps, bound);
        assert_eq!(damping.steps_to_rest(0.001), 0);
    }

    #[test]
    fn test_no_damping_never_rests() {
        let damping = Damping::new(1.0, 0.01);
        assert_eq!(damping.steps_to_rest(1.0), u64::MAX);
    }
}
