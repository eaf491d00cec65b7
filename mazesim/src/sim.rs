//! Tick-driven simulation of every enemy agent on a level.

use mazer_ai::Chaser;
use mazer_core::{Cell, units};
use mazer_paths::PathRange;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::map::MazeMap;

/// Game-state driver: the map, one chasing agent per spawn cell, the
/// target's (player's) pixel position, and the search caches shared by
/// all agents.
pub struct Simulation {
    map: MazeMap,
    paths: PathRange,
    agents: Vec<Chaser>,
    target_px: (f32, f32),
    rng: SmallRng,
}

impl Simulation {
    /// Build a simulation for `map`, spawning one agent per enemy spawn.
    pub fn new(map: MazeMap) -> Self {
        Self::with_rng(map, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Like [`new`](Self::new) with a caller-provided RNG, for
    /// reproducible runs.
    pub fn with_rng(map: MazeMap, rng: SmallRng) -> Self {
        let paths = PathRange::new(map.bounds());
        let agents = map.enemy_spawns.iter().map(|&c| Chaser::new(c)).collect();
        let start = map.find_entry().unwrap_or(Cell::ZERO);
        let target_px = units::grid_to_pixel(start.x as f32, start.y as f32);
        Self {
            map,
            paths,
            agents,
            target_px,
            rng,
        }
    }

    /// The level being simulated.
    pub fn map(&self) -> &MazeMap {
        &self.map
    }

    /// The agents, in spawn order.
    pub fn agents(&self) -> &[Chaser] {
        &self.agents
    }

    /// Place the target at a pixel position.
    pub fn set_target_pixel(&mut self, px: f32, py: f32) {
        self.target_px = (px, py);
    }

    /// Place the target on a cell.
    pub fn set_target_cell(&mut self, c: Cell) {
        self.target_px = units::grid_to_pixel(c.x as f32, c.y as f32);
    }

    /// The cell the target currently occupies.
    pub fn target_cell(&self) -> Cell {
        let (gx, gy) = units::pixel_to_grid(self.target_px.0, self.target_px.1);
        Cell::new(gx.round() as i32, gy.round() as i32)
    }

    /// Advance the whole simulation by one tick of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for agent in &mut self.agents {
            agent.update(dt, self.target_px, &self.map, &mut self.paths, &mut self.rng);
        }
    }
}
