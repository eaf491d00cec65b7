use mazer_core::{Cell, Range};

// ---------------------------------------------------------------------------
// Internal node arena for the A* search
// ---------------------------------------------------------------------------

/// Best-known search record for one cell. At most one lives per cell per
/// search call; cost relaxation overwrites it in place.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// Entries left stale by a relaxation are skipped on pop rather than
/// removed, so the heap never needs a decrease-key operation.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; equal f
        // breaks ties toward the smaller heuristic (closer to the goal).
        other.f.cmp(&self.f).then(other.h.cmp(&self.h))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel cost for cells not yet reached by the current search.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Coordinator for pathfinding queries on a grid rectangle.
///
/// `PathRange` owns the search's internal caches (node arena, neighbor
/// scratch buffer) so that repeated queries incur no allocations after the
/// first use. A single instance is typically shared by every agent on a
/// level.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Cell>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, the arena is kept and
    /// only the generation counter is bumped so stale entries are ignored.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.astar_nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.astar_generation = self.astar_generation.wrapping_add(1);
            return;
        }

        self.astar_nodes.clear();
        self.astar_nodes.resize(new_len, Node::default());
        self.astar_generation = 0;
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Convert a `Cell` to a flat arena index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> Option<usize> {
        if !self.rng.contains(c) {
            return None;
        }
        let x = (c.x - self.rng.min.x) as usize;
        let y = (c.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat arena index back to a `Cell`.
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Cell::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut pr = PathRange::new(Range::new(0, 0, 20, 20));
        let original_cap = pr.astar_nodes.len(); // 400

        let small = Range::new(0, 0, 5, 5);
        pr.set_range(small);
        assert_eq!(pr.range(), small);
        assert_eq!(pr.astar_nodes.len(), original_cap);
        assert_eq!(pr.width, 5);
        assert!(pr.astar_generation > 0);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut pr = PathRange::new(Range::new(0, 0, 5, 5));
        let old_cap = pr.astar_nodes.len(); // 25

        let big = Range::new(0, 0, 20, 20);
        pr.set_range(big);
        assert_eq!(pr.range(), big);
        assert!(pr.astar_nodes.len() > old_cap);
        assert_eq!(pr.astar_nodes.len(), 400);
    }

    #[test]
    fn idx_cell_round_trip() {
        let pr = PathRange::new(Range::new(2, 3, 12, 9));
        for c in [Cell::new(2, 3), Cell::new(11, 8), Cell::new(5, 6)] {
            let i = pr.idx(c).unwrap();
            assert_eq!(pr.cell(i), c);
        }
        assert_eq!(pr.idx(Cell::new(12, 3)), None);
        assert_eq!(pr.idx(Cell::new(1, 5)), None);
    }
}
