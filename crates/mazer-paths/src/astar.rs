use std::collections::BinaryHeap;

use mazer_core::Cell;

use crate::PathRange;
use crate::distance::manhattan;
use crate::pathrange::{NodeRef, UNREACHABLE};
use crate::traits::PathGrid;

impl PathRange {
    /// Compute the shortest walkable path from `start` to `goal` using A*.
    ///
    /// Returns the full path, including both endpoints, with every
    /// consecutive pair one orthogonal step apart. An empty vector means no
    /// path exists; that is a normal outcome, not an error.
    ///
    /// `start` is seeded unconditionally, without a walkability check — a
    /// caller that passes a blocked start cell gets a path that begins on
    /// that blocked cell. `start == goal` returns `[start]`.
    pub fn astar_path<G: PathGrid>(&mut self, grid: &G, start: Cell, goal: Cell) -> Vec<Cell> {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            return Vec::new();
        };

        if start_idx == goal_idx {
            return vec![start];
        }

        // Bump generation to lazily invalidate all nodes.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        // Initialise the start node.
        let start_h = manhattan(start, goal);
        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.f = start_h;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: start_h,
            h: start_h,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries left stale by a later relaxation.
            if self.astar_nodes[ci].generation != cur_gen || !self.astar_nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.astar_nodes[ci].open = false;
            let current_g = self.astar_nodes[ci].g;
            let current_cell = self.cell(ci);

            nbuf.clear();
            grid.neighbors(current_cell, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered this search.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                let nh = manhattan(nc, goal);
                n.g = tentative_g;
                n.f = tentative_g + nh;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    h: nh,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return Vec::new();
        }

        // Reconstruct by walking predecessor indices back from the goal.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.cell(ci));
            ci = self.astar_nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Range;

    /// Test grid built from an ASCII map: `#` is a wall, anything else is
    /// walkable.
    struct AsciiGrid {
        walkable: Vec<bool>,
        width: i32,
        height: i32,
    }

    impl AsciiGrid {
        fn parse(s: &str) -> Self {
            let lines: Vec<&str> = s.trim().lines().collect();
            let width = lines[0].len() as i32;
            let height = lines.len() as i32;
            let mut walkable = Vec::with_capacity((width * height) as usize);
            for line in &lines {
                assert_eq!(line.len() as i32, width, "ragged test map");
                walkable.extend(line.chars().map(|ch| ch != '#'));
            }
            Self {
                walkable,
                width,
                height,
            }
        }

        fn range(&self) -> Range {
            Range::new(0, 0, self.width, self.height)
        }
    }

    impl PathGrid for AsciiGrid {
        fn is_walkable(&self, c: Cell) -> bool {
            c.x >= 0
                && c.x < self.width
                && c.y >= 0
                && c.y < self.height
                && self.walkable[(c.y * self.width + c.x) as usize]
        }

        fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
            for n in c.neighbors_4() {
                if self.is_walkable(n) {
                    buf.push(n);
                }
            }
        }
    }

    fn assert_valid_path(path: &[Cell], start: Cell, goal: Cell) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1, "non-orthogonal step");
        }
    }

    #[test]
    fn open_grid_path_is_manhattan_optimal() {
        let grid = AsciiGrid::parse(
            "\
.....
.....
.....
.....
.....",
        );
        let mut pr = PathRange::new(grid.range());
        let start = Cell::new(0, 0);
        let goal = Cell::new(4, 4);
        let path = pr.astar_path(&grid, start, goal);
        // Manhattan distance 8 steps, inclusive endpoints.
        assert_eq!(path.len(), 9);
        assert_valid_path(&path, start, goal);
    }

    #[test]
    fn blocked_choke_point_means_no_path() {
        let grid = AsciiGrid::parse(
            "\
.##
###
##.",
        );
        let mut pr = PathRange::new(grid.range());
        let path = pr.astar_path(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert!(path.is_empty());
    }

    #[test]
    fn detour_around_wall() {
        let grid = AsciiGrid::parse(
            "\
.....
.###.
.#.#.
.###.
.....",
        );
        let mut pr = PathRange::new(grid.range());
        let start = Cell::new(0, 2);
        let goal = Cell::new(4, 2);
        let path = pr.astar_path(&grid, start, goal);
        assert_valid_path(&path, start, goal);
        // Forced over the top or bottom edge: 8 steps either way.
        assert_eq!(path.len(), 9);
        // The enclosed interior cell is never entered.
        assert!(!path.contains(&Cell::new(2, 2)));
    }

    #[test]
    fn enclosed_goal_returns_empty() {
        let grid = AsciiGrid::parse(
            "\
.....
.###.
.#.#.
.###.
.....",
        );
        let mut pr = PathRange::new(grid.range());
        let path = pr.astar_path(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert!(path.is_empty());
    }

    #[test]
    fn start_equals_goal() {
        let grid = AsciiGrid::parse("...");
        let mut pr = PathRange::new(grid.range());
        let c = Cell::new(1, 0);
        assert_eq!(pr.astar_path(&grid, c, c), vec![c]);
    }

    #[test]
    fn out_of_range_endpoints_return_empty() {
        let grid = AsciiGrid::parse("...");
        let mut pr = PathRange::new(grid.range());
        assert!(pr.astar_path(&grid, Cell::new(-1, 0), Cell::new(2, 0)).is_empty());
        assert!(pr.astar_path(&grid, Cell::new(0, 0), Cell::new(0, 9)).is_empty());
    }

    #[test]
    fn blocked_start_is_still_seeded() {
        // The start cell is a wall; the search proceeds regardless and the
        // returned path begins on the blocked cell.
        let grid = AsciiGrid::parse(
            "\
#..
...",
        );
        let mut pr = PathRange::new(grid.range());
        let start = Cell::new(0, 0);
        let goal = Cell::new(2, 0);
        let path = pr.astar_path(&grid, start, goal);
        assert_valid_path(&path, start, goal);
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let grid = AsciiGrid::parse(
            "\
.#....
.#.##.
.#.#..
...#.#
.###..
......",
        );
        let mut pr = PathRange::new(grid.range());
        let start = Cell::new(0, 0);
        let goal = Cell::new(5, 5);
        let first = pr.astar_path(&grid, start, goal);
        let second = pr.astar_path(&grid, start, goal);
        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_valid_path(&first, start, goal);
    }

    #[test]
    fn corridor_path_is_exact() {
        let grid = AsciiGrid::parse(
            "\
#####
#...#
###.#
#...#
#####",
        );
        let mut pr = PathRange::new(grid.range());
        let path = pr.astar_path(&grid, Cell::new(1, 1), Cell::new(1, 3));
        assert_eq!(
            path,
            vec![
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(3, 1),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 3),
                Cell::new(1, 3),
            ]
        );
    }
}
