//! Rail (cushion) reflection.
//!
//! Checked after integration. When a ball's edge has reached a rail, the
//! velocity component normal to that rail is negated. The x and y axes are
//! checked independently, so a ball in a corner can reflect on both.
//!
//! Position is never clamped. A ball that overshot a rail keeps its reported
//! centre outside the playing area until its reflected velocity carries it
//! back in, usually on the next step.

use log::debug;

use crate::types::Body;

/// Which velocity components were reflected in one check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Reflect `body` off the rails of a `width` x `height` table.
pub fn reflect_at_rails(body: &mut Body, width: f64, height: f64) -> Reflection {
    let r = body.radius;
    let pos = body.position;
    let mut hit = Reflection::default();

    if pos.x - r <= 0.0 || pos.x + r >= width {
        body.velocity.x = -body.velocity.x;
        hit.x = true;
    }

    if pos.y - r <= 0.0 || pos.y + r >= height {
        body.velocity.y = -body.velocity.y;
        hit.y = true;
    }

    if hit.any() {
        debug!(
            "ball '{}' hit rail at ({:.3}, {:.3}), reflected x={} y={}",
            body.tag, pos.x, pos.y, hit.x, hit.y
        );
    }

    hit
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{constants, Vec2};

    const W: f64 = constants::TABLE_WIDTH;
    const H: f64 = constants::TABLE_HEIGHT;

    fn ball(x: f64, y: f64, vx: f64, vy: f64) -> Body {
        Body::at_rest(Vec2::new(x, y), constants::BALL_RADIUS, "w")
            .with_velocity(Vec2::new(vx, vy))
    }

    #[test]
    fn test_left_rail_flips_x_only() {
        let mut body = ball(1.0, 50.0, -2.0, 0.5);
        let hit = reflect_at_rails(&mut body, W, H);

        assert_eq!(hit, Reflection { x: true, y: false });
        assert_eq!(body.velocity, Vec2::new(2.0, 0.5));
    }

    #[test]
    fn test_right_rail_flips_x() {
        let mut body = ball(W - 1.0, 60.0, 1.5, 0.0);
        reflect_at_rails(&mut body, W, H);

        assert_eq!(body.velocity, Vec2::new(-1.5, 0.0));
    }

    #[test]
    fn test_top_and_bottom_rails_flip_y() {
        let mut bottom = ball(100.0, 2.0, 0.3, -1.0);
        reflect_at_rails(&mut bottom, W, H);
        assert_eq!(bottom.velocity, Vec2::new(0.3, 1.0));

        let mut top = ball(100.0, H - 2.0, 0.3, 1.0);
        reflect_at_rails(&mut top, W, H);
        assert_eq!(top.velocity, Vec2::new(0.3, -1.0));
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let mut body = ball(1.0, 1.0, -1.0, -1.0);
        let hit = reflect_at_rails(&mut body, W, H);

        assert_eq!(hit, Reflection { x: true, y: true });
        assert_eq!(body.velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_edge_touching_rail_counts() {
        let r = constants::BALL_RADIUS;
        let mut body = ball(r, 50.0, -1.0, 0.0);
        assert!(reflect_at_rails(&mut body, W, H).x);
    }

    #[test]
    fn test_inside_table_untouched() {
        let mut body = ball(127.0, 63.5, 3.0, -2.0);
        let hit = reflect_at_rails(&mut body, W, H);

        assert!(!hit.any());
        assert_eq!(body.velocity, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_position_not_clamped() {
        let mut body = ball(-1.0, 50.0, -2.0, 0.0);
        reflect_at_rails(&mut body, W, H);

        assert_eq!(body.position, Vec2::new(-1.0, 50.0));
        assert_eq!(body.velocity.x, 2.0);
    }
}
