// Lifecycle of the animation loop. The browser glue schedules frames; this type decides
// whether a frame that fires is allowed to touch the surface at all.

use crate::error::FieldError;
use crate::field::ParticleField;
use crate::renderer::DrawContext;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DriverState {
    Unstarted,
    Running,
    Stopped,
}

#[derive(Debug)]
pub struct FrameDriver {
    state: DriverState,
    frames: u64,
}

impl Default for FrameDriver {
    fn default() -> Self {
        FrameDriver::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        FrameDriver {
            state: DriverState::Unstarted,
            frames: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn start(&mut self) -> Result<(), FieldError> {
        match self.state {
            DriverState::Unstarted => {
                self.state = DriverState::Running;
                Ok(())
            }
            DriverState::Running => Err(FieldError::AlreadyRunning),
            DriverState::Stopped => Err(FieldError::Stopped),
        }
    }

    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
    }

    // Runs one tick when running. Returns Ok(false) without touching the field
    // or the context otherwise, so a stale scheduled callback is harmless.
    pub fn frame<R, C>(&mut self, field: &mut ParticleField<R>, ctx: &mut C) -> Result<bool, FieldError>
    where
        R: Rng,
        C: DrawContext + ?Sized,
    {
        if !self.is_running() {
            return Ok(false);
        }
        field.tick(ctx)?;
        self.frames += 1;
        Ok(true)
    }
}
