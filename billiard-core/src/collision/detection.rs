//! Ball-ball contact detection.
//!
//! Examines every unordered pair exactly once. O(n²), which is fine for a
//! rack of a handful of balls.

use crate::types::Body;

/// A pair of bodies in contact, identified by their index on the table.
///
/// Always `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPair {
    pub first: usize,
    pub second: usize,
}

impl ContactPair {
    pub fn new(first: usize, second: usize) -> Self {
        debug_assert!(first < second, "contact pair must be ordered");
        Self { first, second }
    }
}

/// Contact detector for a table of balls.
#[derive(Debug, Default, Clone)]
pub struct CollisionDetector;

impl CollisionDetector {
    pub fn new() -> Self {
        Self
    }

    /// Find every pair whose centre distance is at most the sum of radii.
    ///
    /// Pairs come out in lexicographic `(first, second)` order so repeated
    /// runs resolve contacts in the same order.
    pub fn detect(&self, bodies: &[Body]) -> Vec<ContactPair> {
        let mut pairs = Vec::new();

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if Self::in_contact(&bodies[i], &bodies[j]) {
                    pairs.push(ContactPair::new(i, j));
                }
            }
        }

        pairs
    }

    /// Touching counts as contact.
    pub fn in_contact(a: &Body, b: &Body) -> bool {
        a.position.distance(&b.position) <= a.radius + b.radius
    }

    /// Pairs that already overlap (strictly closer than touching).
    ///
    /// Used to sanity check an initial layout; the step itself only
    /// needs [`CollisionDetector::detect`].
    pub fn overlapping(&self, bodies: &[Body]) -> Vec<ContactPair> {
        let mut pairs = Vec::new();

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (a, b) = (&bodies[i], &bodies[j]);
                if a.position.distance(&b.position) < a.radius + b.radius {
                    pairs.push(ContactPair::new(i, j));
                }
            }
        }

        pairs
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{constants, Vec2};

    fn ball_at(x: f64, y: f64) -> Body {
        Body::at_rest(Vec2::new(x, y), constants::BALL_RADIUS, "b")
    }

    #[test]
    fn test_touching_pair_detected() {
        let detector = CollisionDetector::new();
        let bodies = vec![ball_at(0.0, 0.0), ball_at(5.7, 0.0)];

        let pairs = detector.detect(&bodies);
        assert_eq!(pairs, vec![ContactPair::new(0, 1)]);
    }

    #[test]
    fn test_exact_touch_detected() {
        let detector = CollisionDetector::new();
        let mut bodies = vec![ball_at(10.0, 10.0), ball_at(10.0, 14.0)];
        for b in bodies.iter_mut() {
            b.radius = 2.0;
        }

        assert_eq!(detector.detect(&bodies).len(), 1);
        assert!(detector.overlapping(&bodies).is_empty());
    }

    #[test]
    fn test_separated_pair_ignored() {
        let detector = CollisionDetector::new();
        let bodies = vec![ball_at(0.0, 0.0), ball_at(6.0, 0.0)];

        assert!(detector.detect(&bodies).is_empty());
    }

    #[test]
    fn test_single_body_never_self_collides() {
        let detector = CollisionDetector::new();
        let bodies = vec![ball_at(50.0, 50.0)];

        assert!(detector.detect(&bodies).is_empty());
    }

    #[test]
    fn test_pairs_in_lexicographic_order() {
        let detector = CollisionDetector::new();
        // 0-1 and 1-2 touch, 0-2 too far apart, 3 touches 2
        let bodies = vec![
            ball_at(0.0, 0.0),
            ball_at(5.0, 0.0),
            ball_at(10.0, 0.0),
            ball_at(10.0, 5.0),
        ];

        let pairs = detector.detect(&bodies);
        assert_eq!(
            pairs,
            vec![
                ContactPair::new(0, 1),
                ContactPair::new(1, 2),
                ContactPair::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_diagonal_distance_is_euclidean() {
        let detector = CollisionDetector::new();
        // dx = dy = 4.0, distance ~5.657 < 5.73
        let bodies = vec![ball_at(0.0, 0.0), ball_at(4.0, 4.0)];
        assert_eq!(detector.detect(&bodies).len(), 1);

        // dx = dy = 4.1, distance ~5.798 > 5.73
        let bodies = vec![ball_at(0.0, 0.0), ball_at(4.1, 4.1)];
        assert!(detector.detect(&bodies).is_empty());
    }
}
