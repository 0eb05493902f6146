use std::time::{Duration, Instant};

const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

/// Frame rate averaged over fixed windows. The reading only changes when a
/// window closes, which keeps the overlay legible.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: Duration,
    window_start: Instant,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self::with_window(now, DEFAULT_WINDOW)
    }

    #[must_use]
    pub fn with_window(now: Instant, window: Duration) -> Self {
        Self {
            window,
            window_start: now,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Counts one frame presented at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.frames += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= self.window {
            self.fps = self.frames as f32 / elapsed.as_secs_f32();
            self.frames = 0;
            self.window_start = now;
        }
    }

    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
