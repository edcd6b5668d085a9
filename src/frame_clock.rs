use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Counts presented frames per one-second window.
#[derive(Debug)]
pub struct FrameClock {
    window_start: Instant,
    frames: u32,
    fps: u32,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0,
        }
    }

    /// Registers a frame and returns the rate of the last completed window.
    pub fn tick(&mut self, now: Instant) -> u32 {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= WINDOW {
            self.fps = (self.frames as f64 / elapsed.as_secs_f64()).round() as u32;
            self.frames = 0;
            self.window_start = now;
        }
        self.fps
    }
}
