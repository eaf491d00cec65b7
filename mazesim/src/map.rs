//! Maze map state and level loading.

use std::fmt;

use mazer_ai::ChaseGrid;
use mazer_core::{Cell, Range, units};
use mazer_paths::PathGrid;

use crate::tiles::{Tile, passable, tile_rune};

/// Tile layout of one maze level, plus the enemy spawn cells read from it.
///
/// Levels are text files with one `x,y=tileType` assignment per line
/// (`#`/`!` comments and blank lines allowed). Tile type codes: 0 wall,
/// 1 entry, 2 exit, 3 trap, 4 enemy spawn, 5 key. Map size is derived
/// from the maximal coordinates; unlisted cells are floor.
pub struct MazeMap {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
    pub enemy_spawns: Vec<Cell>,
}

impl MazeMap {
    /// Parse a level from its text form.
    pub fn parse(src: &str) -> Result<Self, LevelError> {
        let mut entries: Vec<(Cell, u32)> = Vec::new();

        for (idx, raw) in src.lines().enumerate() {
            let line = idx + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') || text.starts_with('!') {
                continue;
            }
            let Some((coords, code)) = text.split_once('=') else {
                return Err(LevelError::MalformedLine {
                    line,
                    content: text.to_string(),
                });
            };
            let Some((x, y)) = coords.trim().split_once(',') else {
                return Err(LevelError::MalformedLine {
                    line,
                    content: text.to_string(),
                });
            };
            let bad_coord = |_| LevelError::BadCoordinate {
                line,
                content: text.to_string(),
            };
            let x: i32 = x.trim().parse().map_err(bad_coord)?;
            let y: i32 = y.trim().parse().map_err(bad_coord)?;
            if x < 0 || y < 0 {
                return Err(LevelError::BadCoordinate {
                    line,
                    content: text.to_string(),
                });
            }
            let code: u32 = code.trim().parse().map_err(|_| LevelError::BadTileCode {
                line,
                content: text.to_string(),
            })?;
            entries.push((Cell::new(x, y), code));
        }

        if entries.is_empty() {
            return Err(LevelError::Empty);
        }

        let width = entries.iter().map(|(c, _)| c.x).max().unwrap_or(0) + 1;
        let height = entries.iter().map(|(c, _)| c.y).max().unwrap_or(0) + 1;

        let mut map = Self {
            tiles: vec![Tile::Floor; (width * height) as usize],
            width,
            height,
            enemy_spawns: Vec::new(),
        };

        for (c, code) in entries {
            match code {
                0 => map.set_tile(c, Tile::Wall),
                1 => map.set_tile(c, Tile::Entry),
                2 => map.set_tile(c, Tile::Exit),
                3 => map.set_tile(c, Tile::Trap),
                4 => map.enemy_spawns.push(c),
                5 => map.set_tile(c, Tile::Key),
                other => log::warn!("level: ignoring unknown tile code {other} at {c}"),
            }
        }

        Ok(map)
    }

    /// Map width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Map height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The map rectangle, for sizing a `PathRange`.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// The tile at `c`, or `None` outside the map.
    pub fn tile_at(&self, c: Cell) -> Option<Tile> {
        if !self.bounds().contains(c) {
            return None;
        }
        Some(self.tiles[(c.y * self.width + c.x) as usize])
    }

    /// Overwrite the tile at `c`. Out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, c: Cell, t: Tile) {
        if self.bounds().contains(c) {
            self.tiles[(c.y * self.width + c.x) as usize] = t;
        }
    }

    /// The entry cell, if the level has one.
    pub fn find_entry(&self) -> Option<Cell> {
        self.find_tile(Tile::Entry)
    }

    /// The key cell, if the level still has one.
    pub fn find_key(&self) -> Option<Cell> {
        self.find_tile(Tile::Key)
    }

    /// All exit cells.
    pub fn find_exits(&self) -> Vec<Cell> {
        let mut exits = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let c = Cell::new(x, y);
                if self.tile_at(c) == Some(Tile::Exit) {
                    exits.push(c);
                }
            }
        }
        exits
    }

    fn find_tile(&self, t: Tile) -> Option<Cell> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = Cell::new(x, y);
                if self.tile_at(c) == Some(t) {
                    return Some(c);
                }
            }
        }
        None
    }
}

impl fmt::Display for MazeMap {
    /// ASCII dump of the tile layout, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let rune = self.tile_at(Cell::new(x, y)).map_or(' ', tile_rune);
                write!(f, "{rune}")?;
            }
        }
        Ok(())
    }
}

impl PathGrid for MazeMap {
    fn is_walkable(&self, c: Cell) -> bool {
        self.tile_at(c).is_some_and(passable)
    }

    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for n in c.neighbors_4() {
            if self.is_walkable(n) {
                buf.push(n);
            }
        }
    }
}

impl ChaseGrid for MazeMap {
    fn is_cell_blocked(&self, px: f32, py: f32) -> bool {
        let c = units::pixel_to_cell(px, py);
        // The outer border always blocks, whatever its tiles claim.
        if c.x <= 0 || c.x >= self.width || c.y <= 0 || c.y >= self.height {
            return true;
        }
        !self.is_walkable(c)
    }
}

/// Errors that can occur when parsing a level.
#[derive(Debug, Clone)]
pub enum LevelError {
    /// The level text contains no tile assignments.
    Empty,
    /// A line is not of the `x,y=tileType` form.
    MalformedLine { line: usize, content: String },
    /// A coordinate is not a non-negative integer.
    BadCoordinate { line: usize, content: String },
    /// A tile type is not an unsigned integer.
    BadTileCode { line: usize, content: String },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "level contains no tile assignments"),
            Self::MalformedLine { line, content } => {
                write!(f, "level line {line}: expected `x,y=tileType`, got {content:?}")
            }
            Self::BadCoordinate { line, content } => {
                write!(f, "level line {line}: bad coordinate in {content:?}")
            }
            Self::BadTileCode { line, content } => {
                write!(f, "level line {line}: bad tile code in {content:?}")
            }
        }
    }
}

impl std::error::Error for LevelError {}
