use mazer_core::{Cell, Dir, units};
use mazer_paths::{PathGrid, PathRange};
use rand::Rng;
use rand::RngExt;

/// Collision-map capability consumed by the chase controller.
///
/// Extends the pathfinder's view of the map with the pixel-space blocked
/// test used to validate wander moves before committing them.
pub trait ChaseGrid: PathGrid {
    /// Whether the cell under the given sprite pixel position is blocked.
    /// Out-of-bounds positions are blocked.
    fn is_cell_blocked(&self, px: f32, py: f32) -> bool;
}

/// Distance (in grid cells) at which an agent starts pursuing the target.
pub const PURSUIT_RADIUS: f32 = 3.0;

/// Seconds between path recomputations while pursuing.
pub const REPLAN_INTERVAL: f32 = 3.0;

/// Seconds between random steps while wandering.
pub const WANDER_INTERVAL: f32 = 1.0;

/// Interpolation rate toward the current waypoint, per second.
pub const CHASE_SPEED: f32 = 4.0;

/// Per-axis distance at which a waypoint counts as reached.
pub const WAYPOINT_EPS: f32 = 0.1;

/// The agent's behavioural mode.
///
/// The plan only exists while pursuing: leaving [`Mood::Pursuing`] drops
/// the path, so a re-entered pursuit always starts from a fresh plan
/// instead of resuming a stale one.
#[derive(Debug, Clone)]
pub enum Mood {
    /// Roaming in random orthogonal steps.
    Wandering,
    /// Following a planned path toward the target.
    Pursuing {
        /// Active plan from the last search; empty when no path exists.
        path: Vec<Cell>,
        /// Index of the waypoint currently being approached.
        index: usize,
        /// Countdown until the next search, in seconds.
        replan: f32,
    },
}

/// Per-agent pursuit controller.
///
/// Owns the agent's continuous position (in fractional grid units) and its
/// behavioural state. Call [`update`](Chaser::update) once per simulation
/// tick; searches run inline on the tick through the shared [`PathRange`].
#[derive(Debug, Clone)]
pub struct Chaser {
    x: f32,
    y: f32,
    mood: Mood,
    // Kept outside `Mood` so entering a pursuit leaves an in-progress
    // wander countdown untouched.
    wander_timer: f32,
}

impl Chaser {
    /// Create an agent at rest on `cell`, wandering.
    pub fn new(cell: Cell) -> Self {
        Self {
            x: cell.x as f32,
            y: cell.y as f32,
            mood: Mood::Wandering,
            wander_timer: WANDER_INTERVAL,
        }
    }

    /// The agent's continuous position, in grid units.
    pub fn pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// The cell the agent currently occupies (nearest to its position).
    pub fn cell(&self) -> Cell {
        Cell::new(self.x.round() as i32, self.y.round() as i32)
    }

    /// The agent's current behavioural mode.
    pub fn mood(&self) -> &Mood {
        &self.mood
    }

    /// Whether the agent is pursuing the target.
    pub fn is_pursuing(&self) -> bool {
        matches!(self.mood, Mood::Pursuing { .. })
    }

    /// Advance the agent by one tick of `dt` seconds.
    ///
    /// `target_px` is the target sprite's pixel position; the pursuit test
    /// converts it to grid units with the sprite centering offset.
    pub fn update<G: ChaseGrid, R: Rng>(
        &mut self,
        dt: f32,
        target_px: (f32, f32),
        grid: &G,
        paths: &mut PathRange,
        rng: &mut R,
    ) {
        let (tx, ty) = units::pixel_to_grid(target_px.0, target_px.1);
        let me = self.cell();
        let dist = (me.x as f32 - tx).hypot(me.y as f32 - ty);
        let in_range = dist <= PURSUIT_RADIUS;

        if in_range && !self.is_pursuing() {
            log::trace!("agent at {me}: target in range ({dist:.2}), pursuing");
            self.mood = Mood::Pursuing {
                path: Vec::new(),
                index: 0,
                // Already elapsed: the first pursuing tick plans immediately.
                replan: 0.0,
            };
        } else if !in_range && self.is_pursuing() {
            log::trace!("agent at {me}: target out of range ({dist:.2}), wandering");
            self.mood = Mood::Wandering;
        }

        match &mut self.mood {
            Mood::Pursuing {
                path,
                index,
                replan,
            } => {
                *replan -= dt;
                if *replan <= 0.0 {
                    let goal = Cell::new(tx.round() as i32, ty.round() as i32);
                    *path = paths.astar_path(grid, me, goal);
                    *index = 0;
                    *replan = REPLAN_INTERVAL;
                    log::debug!("agent at {me}: replanned to {goal}, {} waypoints", path.len());
                }

                if *index < path.len() {
                    let wp = path[*index];
                    if grid.is_walkable(wp) {
                        let (wx, wy) = (wp.x as f32, wp.y as f32);
                        let t = (CHASE_SPEED * dt).min(1.0);
                        self.x += (wx - self.x) * t;
                        self.y += (wy - self.y) * t;
                        if (wx - self.x).abs() < WAYPOINT_EPS && (wy - self.y).abs() < WAYPOINT_EPS
                        {
                            *index += 1;
                        }
                    }
                    // Waypoint blocked (map changed): hold position until
                    // the next re-plan.
                }
            }
            Mood::Wandering => {
                self.wander_timer -= dt;
                if self.wander_timer <= 0.0 {
                    let dir = Dir::ALL[rng.random_range(0..Dir::ALL.len())];
                    let next = me + dir.delta();
                    let (px, py) = units::cell_to_pixel(next);
                    if !grid.is_cell_blocked(px, py) {
                        self.x = next.x as f32;
                        self.y = next.y as f32;
                    }
                    // The timer resets whether or not the step was taken.
                    self.wander_timer = WANDER_INTERVAL;
                }
            }
        }
    }
}
