use std::time::{Duration, Instant};

/// Fixed-rate pacing for the game loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / ticks_per_second.max(1),
            last: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleep out the rest of the current frame.
    ///
    /// Returns how long the frame took, sleep included. The first call only
    /// starts the clock.
    pub fn tick(&mut self) -> Duration {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.period {
                std::thread::sleep(self.period - elapsed);
            }
        }

        let now = Instant::now();
        let frame = self.last.map_or(Duration::ZERO, |last| now - last);
        self.last = Some(now);
        frame
    }
}
