use std::time::Duration;

use crate::config::AnimationConfig;

/// Shortest tick the clear and write phases run at; zero periods are raised to it.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Periods driving the clear and write phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub clear_period: Duration,
    pub write_period: Duration,
    pub start_delay: Duration,
}

impl AnimationTiming {
    /// Period between two removed characters, never zero.
    pub fn clear_tick(&self) -> Duration {
        self.clear_period.max(MIN_PERIOD)
    }

    /// Period between two appended characters, never zero.
    pub fn write_tick(&self) -> Duration {
        self.write_period.max(MIN_PERIOD)
    }

    /// Offset from the start of a request at which writing begins.
    ///
    /// Nothing to clear means writing starts right away; otherwise it waits
    /// for the full clear animation plus the fixed head start.
    pub fn write_start_offset(&self, cleared: usize) -> Duration {
        if cleared == 0 {
            return Duration::ZERO;
        }
        self.clear_tick() * cleared as u32 + self.start_delay
    }

    /// Time a full clear-then-write sequence takes.
    pub fn sequence_duration(&self, cleared: usize, written: usize) -> Duration {
        self.write_start_offset(cleared) + self.write_tick() * written as u32
    }
}

impl From<&AnimationConfig> for AnimationTiming {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            clear_period: Duration::from_millis(config.clear_period_ms),
            write_period: Duration::from_millis(config.write_period_ms),
            start_delay: Duration::from_millis(config.start_delay_ms),
        }
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self::from(&AnimationConfig::default())
    }
}
