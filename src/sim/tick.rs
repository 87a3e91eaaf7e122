//! Per-step orchestration
//!
//! One fixed step: turn held buttons into horizontal intent, spend the jump
//! edge, resolve physics against the grid, then re-center the camera. Strict
//! order, one writer; the renderer only ever sees post-step state.

use crate::config::Config;

use super::physics;
use super::state::GameState;
use super::InputState;

/// Advance the simulation by one fixed timestep.
pub fn tick(state: &mut GameState, input: &InputState, config: &Config, dt: f32) {
    let player = &mut state.player;

    // Horizontal intent: held direction at walk or run speed, zero when
    // neither or both directions are held
    let speed = config.walk_speed(input.run_held);
    player.vel.x = match (input.left, input.right) {
        (true, false) => -speed,
        (false, true) => speed,
        _ => 0.0,
    };

    // Jump edge: ground jump, or spend the one air jump
    if input.jump_pressed {
        if player.grounded {
            player.vel.y = -config.jump_impulse;
            player.grounded = false;
            log::trace!("jump at {:?}", player.pos);
        } else if player.can_double_jump {
            player.vel.y = -config.jump_impulse;
            player.can_double_jump = false;
            log::trace!("double jump at {:?}", player.pos);
        }
    }

    physics::step(player, &state.grid, dt, config.gravity, config.tile_size);

    let world_w = state.grid.world_width(config.tile_size);
    let world_h = state.grid.world_height(config.tile_size);
    state.camera.follow(state.player.center(), world_w, world_h);

    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Button, TileGrid};

    fn test_state() -> (GameState, Config) {
        // 10x6 room with a floor along the bottom row (y in [160, 192))
        let grid = TileGrid::parse(
            "0,0,0,0,0,0,0,0,0,0\n\
             0,0,0,0,0,0,0,0,0,0\n\
             0,0,0,0,0,0,0,0,0,0\n\
             0,0,0,0,0,0,0,0,0,0\n\
             0,0,0,0,0,0,0,0,0,0\n\
             1,1,1,1,1,1,1,1,1,1",
        )
        .unwrap();
        let config = Config::default();
        let state = GameState::new(grid, &config);
        (state, config)
    }

    /// Run idle ticks until the player lands on the floor.
    fn settle(state: &mut GameState, config: &Config) {
        let idle = InputState::new();
        for _ in 0..300 {
            tick(state, &idle, config, config.fixed_dt);
            if state.player.grounded {
                return;
            }
        }
        panic!("player never landed");
    }

    fn jump_tap() -> InputState {
        let mut input = InputState::new();
        input.press(Button::Jump, false);
        input.update();
        input
    }

    #[test]
    fn test_settles_on_floor() {
        let (mut state, config) = test_state();
        settle(&mut state, &config);
        assert_eq!(state.player.pos.y, 160.0 - state.player.height);
        assert_eq!(state.player.vel.y, 0.0);
        assert!(state.player.can_double_jump);
    }

    #[test]
    fn test_ground_jump_leaves_floor() {
        let (mut state, config) = test_state();
        settle(&mut state, &config);
        tick(&mut state, &jump_tap(), &config, config.fixed_dt);
        assert!(!state.player.grounded);
        assert!(state.player.vel.y < 0.0);
        assert!(state.player.pos.y < 160.0 - state.player.height);
    }

    #[test]
    fn test_double_jump_spent_once() {
        let (mut state, config) = test_state();
        settle(&mut state, &config);
        tick(&mut state, &jump_tap(), &config, config.fixed_dt);
        assert!(state.player.can_double_jump);

        // rise for a few steps, then jump again mid-air
        let idle = InputState::new();
        for _ in 0..5 {
            tick(&mut state, &idle, &config, config.fixed_dt);
        }
        tick(&mut state, &jump_tap(), &config, config.fixed_dt);
        assert!(!state.player.can_double_jump);
        assert!(state.player.vel.y < 0.0);

        // third tap while airborne does nothing
        let vel_before = state.player.vel.y;
        tick(&mut state, &jump_tap(), &config, config.fixed_dt);
        let expected = vel_before + config.gravity * config.fixed_dt;
        assert!((state.player.vel.y - expected).abs() < 1e-3);
    }

    #[test]
    fn test_landing_rearms_double_jump() {
        let (mut state, config) = test_state();
        settle(&mut state, &config);
        tick(&mut state, &jump_tap(), &config, config.fixed_dt);
        let idle = InputState::new();
        for _ in 0..5 {
            tick(&mut state, &idle, &config, config.fixed_dt);
        }
        tick(&mut state, &jump_tap(), &config, config.fixed_dt);
        assert!(!state.player.can_double_jump);
        settle(&mut state, &config);
        assert!(state.player.can_double_jump);
    }

    #[test]
    fn test_run_scales_horizontal_intent() {
        let (mut state, config) = test_state();
        settle(&mut state, &config);

        let mut walk = InputState::new();
        walk.press(Button::Right, false);
        walk.update();
        tick(&mut state, &walk, &config, config.fixed_dt);
        assert_eq!(state.player.vel.x, config.move_speed);

        let mut run = walk.clone();
        run.press(Button::Run, false);
        run.update();
        tick(&mut state, &run, &config, config.fixed_dt);
        assert_eq!(state.player.vel.x, config.move_speed * config.run_multiplier);
    }

    #[test]
    fn test_opposed_directions_cancel() {
        let (mut state, config) = test_state();
        settle(&mut state, &config);
        let x_before = state.player.pos.x;
        let mut input = InputState::new();
        input.press(Button::Left, false);
        input.press(Button::Right, false);
        input.update();
        tick(&mut state, &input, &config, config.fixed_dt);
        assert_eq!(state.player.vel.x, 0.0);
        assert_eq!(state.player.pos.x, x_before);
    }

    #[test]
    fn test_camera_tracks_player_within_bounds() {
        let (mut state, config) = test_state();
        settle(&mut state, &config);
        tick(&mut state, &InputState::new(), &config, config.fixed_dt);
        // 320x192 world is smaller than the 800x600 viewport: pinned at 0
        assert_eq!(state.camera.origin, glam::Vec2::ZERO);
    }

    #[test]
    fn test_determinism() {
        // Two states fed identical inputs stay identical
        let (mut a, config) = test_state();
        let (mut b, _) = test_state();

        let mut right = InputState::new();
        right.press(Button::Right, false);
        right.update();

        for step_idx in 0..120 {
            let input = if step_idx == 30 { jump_tap() } else { right.clone() };
            tick(&mut a, &input, &config, config.fixed_dt);
            tick(&mut b, &input, &config, config.fixed_dt);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.player.vel, b.player.vel);
        assert_eq!(a.camera.origin, b.camera.origin);
    }
}
