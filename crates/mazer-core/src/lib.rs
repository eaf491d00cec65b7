//! **mazer-core** — core types shared by the *mazer* maze-game crates.
//!
//! This crate provides the foundational value types the pathfinding and
//! enemy-AI crates build on: integer grid geometry ([`Cell`], [`Range`],
//! [`Dir`]) and the pixel-space unit conversions ([`units`]) used at the
//! boundary with the collision map.

pub mod geom;
pub mod units;

pub use geom::{Cell, Dir, Range};
