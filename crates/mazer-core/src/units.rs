//! Pixel ↔ grid unit conversions.
//!
//! Character sprites are drawn larger (34×32 px) than the 16×16 px tile
//! they collide with, so converting a sprite's pixel position to grid
//! units applies a centering offset that lines the collision box up with
//! the middle of the sprite.

use crate::geom::Cell;

/// Side length of one maze tile, in pixels.
pub const TILE_SIZE: f32 = 16.0;

/// Drawn sprite width, in pixels.
pub const SPRITE_WIDTH: f32 = 34.0;

/// Drawn sprite height, in pixels.
pub const SPRITE_HEIGHT: f32 = 32.0;

/// Horizontal offset centering the tile-sized collision box in the sprite.
pub const CENTER_OFF_X: f32 = (SPRITE_WIDTH - TILE_SIZE) / 2.0;

/// Vertical offset centering the tile-sized collision box in the sprite.
pub const CENTER_OFF_Y: f32 = (SPRITE_HEIGHT - TILE_SIZE) / 2.0;

/// Convert a sprite pixel position to fractional grid units.
#[inline]
pub fn pixel_to_grid(px: f32, py: f32) -> (f32, f32) {
    (
        (px + CENTER_OFF_X) / TILE_SIZE,
        (py + CENTER_OFF_Y) / TILE_SIZE,
    )
}

/// Convert fractional grid units back to a sprite pixel position.
#[inline]
pub fn grid_to_pixel(gx: f32, gy: f32) -> (f32, f32) {
    (gx * TILE_SIZE - CENTER_OFF_X, gy * TILE_SIZE - CENTER_OFF_Y)
}

/// Convert a sprite pixel position to the cell its collision box occupies.
#[inline]
pub fn pixel_to_cell(px: f32, py: f32) -> Cell {
    let (gx, gy) = pixel_to_grid(px, py);
    Cell::new(gx as i32, gy as i32)
}

/// The pixel position of a cell's top-left corner (no sprite offset).
#[inline]
pub fn cell_to_pixel(c: Cell) -> (f32, f32) {
    (c.x as f32 * TILE_SIZE, c.y as f32 * TILE_SIZE)
}
