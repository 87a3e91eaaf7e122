//! Axis-separated tile collision resolver
//!
//! One step: integrate gravity, move and resolve the x axis, then move and
//! resolve the y axis. Resolving one axis at a time against the already
//! updated other axis skips the diagonal corner cases entirely; a perfectly
//! simultaneous corner hit resolves as a vertical contact. That trade-off is
//! an accepted approximation of this resolver, not a bug.
//!
//! Each pass scans only the tiles the leading edge can touch, so cost is
//! bounded by entity extent over tile size and independent of grid size.
//! Assumes per-step displacement of at most one tile (the fixed timestep and
//! frame-time clamp guarantee this for sane tunables).

use super::grid::TileGrid;
use super::state::Player;

/// Tile index containing a world coordinate
#[inline]
pub fn tile_at(coord: f32, tile_size: f32) -> i32 {
    (coord / tile_size).floor() as i32
}

/// Advance the player by one fixed step against the grid.
///
/// Snaps position to the tile boundary and zeroes the offending velocity
/// component on contact. `grounded` reports whether the step ended standing
/// on a solid tile; landing re-arms the double jump.
pub fn step(player: &mut Player, grid: &TileGrid, dt: f32, gravity: f32, tile_size: f32) {
    player.vel.y += gravity * dt;

    // Horizontal pass
    player.pos.x += player.vel.x * dt;
    if player.vel.x > 0.0 {
        let tx = tile_at(player.pos.x + player.width, tile_size);
        let top = tile_at(player.pos.y, tile_size);
        let bottom = tile_at(player.pos.y + player.height - 1.0, tile_size);
        for ty in top..=bottom {
            if grid.is_solid(tx, ty) {
                player.pos.x = tx as f32 * tile_size - player.width;
                player.vel.x = 0.0;
                break;
            }
        }
    } else if player.vel.x < 0.0 {
        let tx = tile_at(player.pos.x, tile_size);
        let top = tile_at(player.pos.y, tile_size);
        let bottom = tile_at(player.pos.y + player.height - 1.0, tile_size);
        for ty in top..=bottom {
            if grid.is_solid(tx, ty) {
                player.pos.x = (tx + 1) as f32 * tile_size;
                player.vel.x = 0.0;
                break;
            }
        }
    }

    // Vertical pass
    player.pos.y += player.vel.y * dt;
    player.grounded = false;
    if player.vel.y > 0.0 {
        let ty = tile_at(player.pos.y + player.height, tile_size);
        let left = tile_at(player.pos.x, tile_size);
        let right = tile_at(player.pos.x + player.width - 1.0, tile_size);
        for tx in left..=right {
            if grid.is_solid(tx, ty) {
                player.pos.y = ty as f32 * tile_size - player.height;
                player.vel.y = 0.0;
                player.grounded = true;
                player.can_double_jump = true;
                break;
            }
        }
    } else if player.vel.y < 0.0 {
        let ty = tile_at(player.pos.y, tile_size);
        let left = tile_at(player.pos.x, tile_size);
        let right = tile_at(player.pos.x + player.width - 1.0, tile_size);
        for tx in left..=right {
            if grid.is_solid(tx, ty) {
                player.pos.y = (ty + 1) as f32 * tile_size;
                player.vel.y = 0.0;
                break;
            }
        }
    }
}
