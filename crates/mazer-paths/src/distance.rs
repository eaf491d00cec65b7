use mazer_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for 4-directional unit-cost movement, which
/// is what makes the A* search return step-count-optimal paths.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
