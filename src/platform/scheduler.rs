//! Fixed timestep scheduler
//!
//! The host measures real frame time and asks how many simulation ticks to
//! run. Leftover time carries over to the next frame.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed elapsed frame time (seconds) and return the number of ticks to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // Long stalls (debugger, suspended tab) must not replay forever
        let dt = frame_dt.clamp(0.0, 0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    /// Fraction of a tick left in the accumulator (for interpolation)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut fs = FixedStep::new(0.01, 8);
        assert_eq!(fs.advance(0.005), 0);
        assert_eq!(fs.advance(0.006), 1);
        assert!(fs.alpha() < 1.0);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut fs = FixedStep::new(0.001, 4);
        assert_eq!(fs.advance(0.05), 4);
        assert!(fs.alpha() <= 1.0);
    }

    #[test]
    fn test_sixty_hertz_frame() {
        let mut fs = FixedStep::default();
        assert_eq!(fs.advance(SIM_DT * 2.5), 2);
    }
}
