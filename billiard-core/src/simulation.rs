//! Shot driver: strike the cue ball and step the table until it rests.
//!
//! Collects [`Frame`]s along the way for an external renderer:
//! - the initial frame (step 0)
//! - every `stride`-th step
//! - the final resting frame, if the stride did not already land on it

use log::info;

use crate::error::SimError;
use crate::table::Table;
use crate::types::{Frame, ShotState, Vec2};

/// Summary of a completed shot.
#[derive(Debug, Clone)]
pub struct ShotReport {
    pub frames: Vec<Frame>,
    pub steps: u64,
    pub contacts: usize,
}

impl ShotReport {
    /// The resting layout at the end of the shot.
    pub fn final_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

/// One shot on a table.
pub struct Shot {
    table: Table,
    stride: u64,
}

impl Shot {
    pub fn new(table: Table) -> Self {
        Self { table, stride: 1 }
    }

    /// Record a frame every `stride` steps (0 is treated as 1).
    pub fn with_stride(mut self, stride: u64) -> Self {
        self.stride = stride.max(1);
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    /// Strike the cue ball with `force` and run to rest.
    pub fn run(&mut self, force: Vec2) -> Result<ShotReport, SimError> {
        self.table.strike(force)?;
        self.run_to_rest()
    }

    /// Step an already struck table until it rests.
    pub fn run_to_rest(&mut self) -> Result<ShotReport, SimError> {
        let start_steps = self.table.steps();
        let start_contacts = self.table.contacts_resolved();
        let mut frames = vec![self.table.frame()];

        while self.table.state() == ShotState::Moving {
            self.table.step()?;
            if self.table.steps() % self.stride == 0 {
                frames.push(self.table.frame());
            }
        }

        if frames.last().map(|f| f.step) != Some(self.table.steps()) {
            frames.push(self.table.frame());
        }

        let report = ShotReport {
            frames,
            steps: self.table.steps() - start_steps,
            contacts: self.table.contacts_resolved() - start_contacts,
        };

        info!(
            "shot came to rest after {} steps, {} contacts, {} frames",
            report.steps,
            report.contacts,
            report.frames.len()
        );

        Ok(report)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PhysicsConfig, RackConfig};
    use crate::types::{constants, Body};

    fn lone_ball_table() -> Table {
        let body = Body::at_rest(Vec2::new(127.0, 63.5), constants::BALL_RADIUS, "w");
        Table::new(PhysicsConfig::default(), vec![body]).unwrap()
    }

    #[test]
    fn test_zero_force_rests_immediately() {
        let mut shot = Shot::new(lone_ball_table());
        let report = shot.run(Vec2::ZERO).unwrap();

        assert_eq!(report.steps, 0);
        assert_eq!(report.frames.len(), 1);
        assert_eq!(report.frames[0].step, 0);
    }

    #[test]
    fn test_stride_controls_frame_count() {
        let mut every = Shot::new(lone_ball_table());
        let all = every.run(Vec2::new(2.0, 0.0)).unwrap();

        let mut sparse = Shot::new(lone_ball_table()).with_stride(100);
        let some = sparse.run(Vec2::new(2.0, 0.0)).unwrap();

        assert_eq!(all.steps, some.steps);
        assert_eq!(all.frames.len() as u64, all.steps + 1);
        assert!(some.frames.len() < all.frames.len());
        assert!(some.frames.iter().skip(1).all(|f| f.step % 100 == 0 || f.step == some.steps));
    }

    #[test]
    fn test_final_frame_is_resting_layout() {
        let mut shot = Shot::new(lone_ball_table()).with_stride(1_000_000);
        let report = shot.run(Vec2::new(1.0, 1.0)).unwrap();

        let last = report.final_frame().unwrap();
        assert_eq!(last.step, report.steps);
        assert_eq!(last.balls[0].position, shot.table().bodies()[0].position);
        assert!(shot.table().is_resting());
    }

    #[test]
    fn test_three_ball_rack_reaches_rest() {
        let table = Table::from_rack(PhysicsConfig::default(), &RackConfig::three_ball()).unwrap();
        let mut shot = Shot::new(table).with_stride(40);

        // Cue ball rolls along the top of the table, clear of the other two
        let report = shot.run(Vec2::new(5.0, 0.0)).unwrap();

        assert!(report.steps > 0);
        assert!(shot.into_table().is_resting());
    }
}
