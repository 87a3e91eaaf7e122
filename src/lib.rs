//! Tilebound - a 2D tile-grid platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tile grid, physics, camera, input)
//! - `config`: Tunables as an explicit record (JSON-loadable)
//! - `timestep`: Fixed-timestep accumulator decoupling sim rate from frame rate
//!
//! Rendering, windowing, and audio are external consumers of the state this
//! crate produces; nothing here touches a platform API.

pub mod config;
pub mod sim;
pub mod timestep;

pub use config::Config;
pub use timestep::FixedTimestep;
