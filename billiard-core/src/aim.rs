//! Ghost-ball aim planning.
//!
//! Picks a cue force that sends the object ball toward a pocket:
//!
//! ```text
//!            pocket
//!             ◎
//!            /  u = unit(pocket - object)
//!           ●   object ball
//!          ◌    ghost ball = object - 2r·u
//!         /
//!        /  d = unit(ghost - cue)
//!       ○   cue ball
//! ```
//!
//! On contact the object ball leaves along `u` with roughly `|v_cue|·cos θ`,
//! where `cos θ = u·d` (the cut). To give it `target_speed`, the cue ball
//! needs `target_speed / cut`, so the force is `d · target_speed / cut`.
//! Pockets behind the object ball (`cut <= 0`) are unreachable. The pocket
//! needing the smallest force wins.
//!
//! Other balls in the path are not checked.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::table::{Table, CUE_INDEX, OBJECT_INDEX};
use crate::types::Vec2;

/// Tuning for [`plan_shot`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimParams {
    /// Speed factor the object ball should leave with
    pub target_speed: f64,
}

impl Default for AimParams {
    fn default() -> Self {
        Self { target_speed: 3.0 }
    }
}

/// A recommended shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimSolution {
    /// Index into [`Table::pockets`]
    pub pocket: usize,
    pub force: Vec2,
    /// Cosine between cue direction and object ball direction, in (0, 1]
    pub cut: f64,
}

/// Aim at a single pocket. `Ok(None)` when the pocket cannot be reached.
pub fn aim_at_pocket(
    cue: Vec2,
    object: Vec2,
    pocket: Vec2,
    radius: f64,
    target_speed: f64,
) -> Result<Option<(Vec2, f64)>, SimError> {
    let to_pocket = (pocket - object)
        .normalized()
        .ok_or_else(|| SimError::DegenerateGeometry {
            context: "object ball sits on the pocket".to_string(),
        })?;

    let ghost = object - to_pocket * (2.0 * radius);
    let direction = (ghost - cue)
        .normalized()
        .ok_or_else(|| SimError::DegenerateGeometry {
            context: "cue ball sits on the ghost ball position".to_string(),
        })?;

    let cut = to_pocket.dot(&direction);
    if cut <= 0.0 {
        return Ok(None);
    }

    Ok(Some((direction * (target_speed / cut), cut)))
}

/// Cheapest pocket shot for the object ball (index 1) from the cue ball
/// (index 0), or `None` if no pocket is reachable.
pub fn plan_shot(table: &Table, params: &AimParams) -> Result<Option<AimSolution>, SimError> {
    let cue = table.body(CUE_INDEX)?.position;
    let object = table.body(OBJECT_INDEX)?;

    let mut best: Option<AimSolution> = None;
    for (pocket, position) in table.pockets().iter().enumerate() {
        let Some((force, cut)) =
            aim_at_pocket(cue, object.position, *position, object.radius, params.target_speed)?
        else {
            continue;
        };

        let better = best.map_or(true, |b| force.magnitude() < b.force.magnitude());
        if better {
            best = Some(AimSolution { pocket, force, cut });
        }
    }

    Ok(best)
}

// =============================================================================
// Tests
// =============================================================================
