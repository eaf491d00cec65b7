//! Headless maze game state.
//!
//! Ties the *mazer* crates together into a runnable simulation: the tile
//! terrain and level loader ([`MazeMap`]), the collision-map capability
//! impls the pathfinding and AI crates consume, and the per-tick
//! [`Simulation`] driving every enemy agent.

pub mod map;
pub mod sim;
pub mod tiles;

pub use map::{LevelError, MazeMap};
pub use sim::Simulation;
pub use tiles::Tile;
