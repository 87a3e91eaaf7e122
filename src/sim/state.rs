//! Player entity and the simulation state aggregate
//!
//! One controllable entity exists in this core, so the player is a single
//! composed record operated on by free-function systems - no dispatch, no
//! hierarchy. `GameState` owns everything a step mutates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::grid::TileGrid;
use crate::config::Config;

/// Default player extent in world units
pub const PLAYER_SIZE: f32 = 32.0;
/// Spawn point for a fresh session
pub const SPAWN_POS: Vec2 = Vec2::new(64.0, 64.0);

/// The controllable entity: an axis-aligned box with kinematics and the
/// flags the jump logic needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the bounding box, world coordinates
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    /// True when the last step ended standing on a solid tile
    pub grounded: bool,
    /// One extra mid-air jump, re-armed on landing
    pub can_double_jump: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            grounded: false,
            can_double_jump: true,
        }
    }

    /// Center of the bounding box (camera target)
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) * 0.5
    }
}

/// Everything one simulation step reads and writes. The tile grid is loaded
/// once and read-only thereafter; player and camera are mutated only inside
/// `tick`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub camera: Camera,
    pub grid: TileGrid,
    /// Fixed steps elapsed since session start
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(grid: TileGrid, config: &Config) -> Self {
        Self {
            player: Player::new(SPAWN_POS),
            camera: Camera::new(config.viewport_width, config.viewport_height),
            grid,
            time_ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_spawns_player() {
        let grid = TileGrid::parse("0,0\n1,1").unwrap();
        let state = GameState::new(grid, &Config::default());
        assert_eq!(state.player.pos, SPAWN_POS);
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(!state.player.grounded);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_player_center() {
        let mut p = Player::new(Vec2::new(10.0, 20.0));
        p.width = 32.0;
        p.height = 48.0;
        assert_eq!(p.center(), Vec2::new(26.0, 44.0));
    }
}
