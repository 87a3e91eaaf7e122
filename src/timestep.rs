//! Fixed-timestep accumulator
//!
//! Leftover real time carries over between frames so the simulation advances
//! in fixed increments regardless of render cadence. A frame-time clamp keeps
//! a debugger pause or one slow frame from bursting enough catch-up steps to
//! tunnel the player through geometry.

/// Accumulator scheduling fixed simulation steps from variable frame times.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    accumulator: f32,
    step: f32,
    max_frame_time: f32,
}

impl FixedTimestep {
    pub fn new(step: f32, max_frame_time: f32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_frame_time,
        }
    }

    /// Feed one real frame's elapsed time; returns how many fixed steps to run.
    ///
    /// After this returns, `0 <= accumulator < step` holds: the remainder
    /// carries into the next frame.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.min(self.max_frame_time);
        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Leftover time not yet simulated (useful for render interpolation)
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}
