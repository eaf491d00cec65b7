use mazer_core::Cell;

/// Walkability capability exposed by the maze's collision map.
///
/// The pathfinder treats the map as read-only: both methods must be pure
/// with respect to a single search call.
pub trait PathGrid {
    /// Whether a cell is free of permanent obstructions.
    fn is_walkable(&self, c: Cell) -> bool;

    /// Append the orthogonal neighbors of `c` into `buf`, already filtered
    /// to walkable cells. The caller clears `buf` before calling.
    ///
    /// The order is not semantically significant but must be deterministic
    /// so that searches are reproducible on an unchanged map.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}
