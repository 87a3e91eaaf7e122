//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness
//! - Single entity, single writer per step
//! - No rendering or platform dependencies

pub mod camera;
pub mod grid;
pub mod input;
pub mod physics;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use grid::{LoadError, TileGrid};
pub use input::{Button, InputState};
pub use state::{GameState, Player};
pub use tick::tick;
