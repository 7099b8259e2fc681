//! Fixed-period trigger for the tick loop

use std::time::{Duration, Instant};

/// Decides when the next tick is due.
///
/// The owner calls [`Ticker::poll`] from its event loop and runs one tick each
/// time it returns `true`. Missed periods are skipped, never replayed in a burst.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// First tick is due immediately at `start`
    pub fn new(period: Duration, start: Instant) -> Self {
        Self { period, next_due: start }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        true
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn test_first_poll_fires() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD, start);
        assert!(ticker.poll(start));
        assert!(!ticker.poll(start));
        assert_eq!(ticker.time_until_due(start), PERIOD);
    }

    #[test]
    fn test_fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD, start);
        assert!(ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(99)));
        assert!(ticker.poll(start + Duration::from_millis(100)));
        assert!(!ticker.poll(start + Duration::from_millis(150)));
        assert!(ticker.poll(start + Duration::from_millis(205)));
        assert_eq!(
            ticker.time_until_due(start + Duration::from_millis(205)),
            Duration::from_millis(95)
        );
    }

    #[test]
    fn test_missed_periods_are_skipped() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD, start);
        assert!(ticker.poll(start));

        let late = start + Duration::from_millis(550);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.time_until_due(late), PERIOD);
    }
}
