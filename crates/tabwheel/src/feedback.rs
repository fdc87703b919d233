use std::time::Duration;

/// Scale reached at the bottom of a press pulse.
pub const PRESS_DEPTH: f64 = 0.8;
/// Length of each half of the pulse (shrink, then recover).
pub const PRESS_HALF: Duration = Duration::from_millis(100);

/// Two-segment linear scale pulse played on a pressed tab.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PressPulse {
    elapsed: Duration,
}

impl PressPulse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false once the pulse has finished.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= PRESS_HALF * 2
    }

    pub fn scale(&self) -> f64 {
        let t = self.elapsed.as_secs_f64() / PRESS_HALF.as_secs_f64();
        let dip = 1.0 - PRESS_DEPTH;

        if t <= 1.0 {
            1.0 - dip * t
        } else if t <= 2.0 {
            PRESS_DEPTH + dip * (t - 1.0)
        } else {
            1.0
        }
    }
}
