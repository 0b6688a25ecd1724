use crate::raster::TIME_SCALE;

/// Monotonic frame counter with a Running/Stopped flag.
///
/// The clock owns only the counter. Cadence lives with the host loop: each
/// scheduling slot the host calls [`AnimationClock::tick`], which increments
/// the frame by exactly 1 while Running and does nothing while Stopped.
/// Stopping never resets the counter; resuming continues where it left off.
/// Teardown is dropping the host loop — there is no registered callback to
/// cancel.
#[derive(Clone, Copy, Debug)]
pub struct AnimationClock {
    frame: u64,
    running: bool,
    time_scale: f64,
}

impl AnimationClock {
    /// New clock at frame 0, Running.
    pub fn new() -> Self {
        Self {
            frame: 0,
            running: true,
            time_scale: TIME_SCALE,
        }
    }

    /// New clock at frame 0, Stopped.
    pub fn stopped() -> Self {
        Self {
            running: false,
            ..Self::new()
        }
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Advance one scheduling slot. Increments the frame iff Running.
    pub fn tick(&mut self) {
        if self.running {
            self.frame += 1;
        }
    }

    /// The sole Running <-> Stopped transition.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Field time for [`render_at`]: `frame * time_scale`.
    ///
    /// [`render_at`]: crate::raster::render_at
    #[inline]
    pub fn time(&self) -> f64 {
        self.frame as f64 * self.time_scale
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}
