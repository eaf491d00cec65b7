//! Tile kinds and helpers.

/// One maze tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
    Entry,
    Exit,
    Trap,
    Key,
}

/// Whether a tile can be occupied or crossed. The entry behaves like a
/// one-way door: characters leave it but never walk back onto it.
pub fn passable(t: Tile) -> bool {
    !matches!(t, Tile::Wall | Tile::Entry)
}

/// Character representation of a tile, for debug dumps.
pub fn tile_rune(t: Tile) -> char {
    match t {
        Tile::Floor => '.',
        Tile::Wall => '#',
        Tile::Entry => 'E',
        Tile::Exit => 'X',
        Tile::Trap => 'T',
        Tile::Key => 'K',
    }
}
