//! Fixed-timestep accumulator that turns variable frame times into a whole
//! number of simulation steps.

use crate::common::{PhysicsConfig, PhysicsError};

/// Outcome of feeding one frame's elapsed time to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// Fixed steps run this frame.
    pub steps: usize,
    /// Leftover fraction of a step in [0, 1), for render interpolation.
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedStep {
    pub timestep: f64,
    max_frame_delta: f64,
    time_scale: f64,
    accumulator: f64,
}

impl FixedStep {
    pub fn new(timestep: f64, max_frame_delta: f64) -> Result<Self, PhysicsError> {
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(PhysicsError::InvalidTimestep(timestep));
        }
        check_frame_delta(max_frame_delta)?;
        Ok(Self {
            timestep,
            max_frame_delta,
            time_scale: 1.0,
            accumulator: 0.0,
        })
    }

    pub fn from_config(config: &PhysicsConfig) -> Result<Self, PhysicsError> {
        let mut clock = Self::new(config.timestep, config.max_frame_delta)?;
        clock.set_time_scale(config.time_scale)?;
        Ok(clock)
    }

    pub fn max_frame_delta(&self) -> f64 {
        self.max_frame_delta
    }

    /// Longest frame time fed to the accumulator; must be finite and > 0.
    pub fn set_max_frame_delta(&mut self, max_frame_delta: f64) -> Result<(), PhysicsError> {
        check_frame_delta(max_frame_delta)?;
        self.max_frame_delta = max_frame_delta;
        Ok(())
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Multiplier applied to the `dt` handed to each step; must be finite and >= 0.
    pub fn set_time_scale(&mut self, time_scale: f64) -> Result<(), PhysicsError> {
        if !(time_scale.is_finite() && time_scale >= 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "time_scale must be >= 0, got {time_scale}"
            )));
        }
        self.time_scale = time_scale;
        Ok(())
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Accumulates `elapsed` seconds (capped at `max_frame_delta`) and calls
    /// `step` with the scaled timestep once per whole timestep accumulated.
    ///
    /// If `step` fails, the error is returned and the remaining steps of the
    /// frame are dropped.
    pub fn advance<F>(&mut self, elapsed: f64, mut step: F) -> Result<FrameReport, PhysicsError>
    where
        F: FnMut(f64) -> Result<(), PhysicsError>,
    {
        if !(elapsed.is_finite() && elapsed >= 0.0) {
            return Err(PhysicsError::InvalidTimestep(elapsed));
        }

        self.accumulator += elapsed.min(self.max_frame_delta);

        let mut steps = 0;
        while self.accumulator >= self.timestep {
            self.accumulator -= self.timestep;
            if let Err(err) = step(self.timestep * self.time_scale) {
                self.accumulator = 0.0;
                return Err(err);
            }
            steps += 1;
        }

        Ok(FrameReport {
            steps,
            alpha: self.accumulator / self.timestep,
        })
    }
}

fn check_frame_delta(max_frame_delta: f64) -> Result<(), PhysicsError> {
    if max_frame_delta.is_finite() && max_frame_delta > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidConfig(format!(
            "max_frame_delta must be > 0, got {max_frame_delta}"
        )))
    }
}
