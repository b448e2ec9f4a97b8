//! Collision handling for billiard balls.
//!
//! This module handles:
//! - **Detection**: all-pairs overlap test between balls
//! - **Resolution**: elastic impulse exchange for each contact pair
//! - **Rails**: velocity reflection at the table edges
//!
//! ## Discrete Contact Test
//!
//! Balls are few and slow relative to their size, so a plain overlap test at
//! each step is enough. A pair is in contact when
//!
//! ```text
//!   |pos_b - pos_a| <= r_a + r_b
//!
//!     ●─────●        touching
//!      ●───●         overlapping
//! ```
//!
//! Every contact found in a step is resolved once, in detection order. There
//! is no second pass even if a resolved pair pushes a ball into a third one;
//! simultaneous multi-ball contacts are handled pairwise.

pub mod detection;
pub mod rails;
pub mod resolution;

pub use detection::*;
pub use rails::*;
pub use resolution::*;
