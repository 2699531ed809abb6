//! Count-up animation for stat values.
//!
//! Values rise from zero with an exponential ease-out and land exactly on
//! the target once the duration has elapsed.

use std::time::Duration;

/// Animation length used by stat cards.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(2);

/// Roughly 60 fps.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A count from zero up to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    pub end: u64,
    pub duration: Duration,
}

impl CountUp {
    pub fn new(end: u64) -> Self {
        Self {
            end,
            duration: DEFAULT_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Displayed value after `elapsed`. Non-decreasing in `elapsed`, never
    /// above `end`, and exactly `end` from `duration` onward.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if elapsed >= self.duration {
            return self.end;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let current = (self.end as f64 * ease_out_expo(t)).floor() as u64;
        current.min(self.end)
    }

    /// Whether the animation has reached its end value.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Exponential ease-out normalised so that `ease_out_expo(1.0) == 1.0`.
fn ease_out_expo(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    (1.0 - 2f64.powf(-10.0 * t)) * 1024.0 / 1023.0
}

/// Format with `,` between groups of three digits.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
