//! Enemy decision loop for maze games.
//!
//! A [`Chaser`] is the per-agent controller that alternates between random
//! wandering and A*-guided pursuit of a target, advancing the agent's
//! continuous position along the planned path with smoothed motion. It
//! consumes the collision map through the [`ChaseGrid`] capability and
//! shares one [`mazer_paths::PathRange`] with every other agent on the
//! level.

mod chaser;

pub use chaser::{
    CHASE_SPEED, ChaseGrid, Chaser, Mood, PURSUIT_RADIUS, REPLAN_INTERVAL, WANDER_INTERVAL,
    WAYPOINT_EPS,
};
