use std::time::{Duration, Instant};

/// Keeps a fixed cadence between generations.
///
/// The time spent rendering and advancing is subtracted from the next wait.
pub struct Pacer {
    interval: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Smoothed number of generations per second.
    pub fn rate(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Time left until the next generation is due.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.frame_timer.elapsed())
    }

    /// Marks a generation boundary.
    pub fn tick(&mut self) {
        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;
        self.frame_timer = Instant::now();
    }
}
