use web_time::{Duration, Instant};

/// Backlog beyond this many ticks is dropped instead of replayed.
const MAX_CATCH_UP: u32 = 8;

/// Fixed-period tick pacing for camera transitions.
///
/// The caller polls once per frame; the clock reports how many whole
/// periods elapsed since the last reported tick, carrying the remainder so
/// the long-run tick rate matches the period regardless of frame rate.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    last_tick: Instant,
}

impl TickClock {
    /// Clock starting now. A zero period is raised to one millisecond.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    /// Clock whose first period starts at `start`.
    #[must_use]
    pub fn starting_at(period: Duration, start: Instant) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            last_tick: start,
        }
    }

    /// Tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Restart the period at `now`, discarding any pending ticks.
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Ticks due since the last call, measured at the current time.
    pub fn ticks_due(&mut self) -> u32 {
        self.ticks_due_at(Instant::now())
    }

    /// Ticks due at `now`. After a stall longer than the catch-up limit
    /// the backlog is dropped and the clock resynchronizes to `now`.
    pub fn ticks_due_at(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_tick);
        let due = elapsed.as_nanos() / self.period.as_nanos();
        if due > u128::from(MAX_CATCH_UP) {
            self.last_tick = now;
            return MAX_CATCH_UP;
        }
        let due = due as u32;
        self.last_tick += self.period * due;
        due
    }
}
