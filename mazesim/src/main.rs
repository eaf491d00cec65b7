//! Headless demo: load the bundled level and let the enemies react while
//! the target walks from the entry to the key.

use mazer_paths::PathRange;
use mazesim::{MazeMap, Simulation};

const LEVEL_1: &str = include_str!("../data/level-1.properties");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let map = MazeMap::parse(LEVEL_1)?;
    log::info!(
        "loaded level: {}x{} cells, {} enemies",
        map.width(),
        map.height(),
        map.enemy_spawns.len()
    );
    log::debug!("layout:\n{map}");

    let entry = map.find_entry().ok_or("level has no entry")?;
    let key = map.find_key().ok_or("level has no key")?;

    // Route the target along the shortest walk from the entry to the key.
    let mut pr = PathRange::new(map.bounds());
    let route = pr.astar_path(&map, entry, key);
    if route.is_empty() {
        return Err("key is unreachable from the entry".into());
    }
    log::info!("target route: {} steps from {entry} to {key}", route.len() - 1);

    let mut sim = Simulation::new(map);
    for &step in &route {
        sim.set_target_cell(step);
        // One target step per simulated second, ticked at 10 Hz.
        for _ in 0..10 {
            sim.tick(0.1);
        }
        for (i, agent) in sim.agents().iter().enumerate() {
            log::info!(
                "target {step}: enemy {i} at {} ({})",
                agent.cell(),
                if agent.is_pursuing() { "pursuing" } else { "wandering" }
            );
        }
    }

    for (i, agent) in sim.agents().iter().enumerate() {
        let d = mazer_paths::manhattan(agent.cell(), sim.target_cell());
        log::info!("final: enemy {i} at {}, {d} cells from the target", agent.cell());
    }
    Ok(())
}
