use std::time::{Duration, Instant};

use crossbeam_channel::{never, tick, Receiver};

/// How often a [`Ticker`] fires before it is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Forever,
    Times(u64),
}

impl Repeat {
    /// Translate the host's raw repeat count, where `0` means "forever".
    #[must_use]
    pub fn from_count(count: u64) -> Self {
        match count {
            0 => Self::Forever,
            n => Self::Times(n),
        }
    }
}

/// A repeating timer for cooperative, single-threaded scheduling.
///
/// The owner `select!`s on [`Ticker::channel`] and calls [`Ticker::tick`] for every firing it
/// handles. The timer's lifetime is tied to the owning value: dropping the ticker cancels it,
/// so a hidden panel cannot leave its refresh timer running.
pub struct Ticker {
    ticks: Receiver<Instant>,
    remaining: Repeat,
}

impl Ticker {
    #[must_use]
    pub fn new(interval: Duration, repeat: Repeat) -> Self {
        let ticks = match repeat {
            Repeat::Times(0) => never(),
            _ => tick(interval),
        };

        Self {
            ticks,
            remaining: repeat,
        }
    }

    /// The channel delivering firings, for use in a `select!` arm. Exhausted tickers hand out
    /// a channel that never fires.
    #[must_use]
    pub fn channel(&self) -> &Receiver<Instant> {
        &self.ticks
    }

    /// Consume one firing. Returns `false` once the repeat policy is used up, at which point
    /// [`Ticker::channel`] stops delivering.
    pub fn tick(&mut self) -> bool {
        match &mut self.remaining {
            Repeat::Forever => true,
            Repeat::Times(0) => false,
            Repeat::Times(n) => {
                *n -= 1;
                if *n == 0 {
                    self.ticks = never();
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const INTERVAL: Duration = Duration::from_millis(1);
    const WAIT: Duration = Duration::from_millis(250);

    #[test]
    fn zero_count_means_forever() {
        assert_eq!(Repeat::Forever, Repeat::from_count(0));
        assert_eq!(Repeat::Times(3), Repeat::from_count(3));
    }

    #[test]
    fn forever_keeps_firing() {
        let mut ticker = Ticker::new(INTERVAL, Repeat::Forever);

        for _ in 0..3 {
            ticker.channel().recv_timeout(WAIT).unwrap();
            assert!(ticker.tick());
        }
    }

    #[test]
    fn times_policy_exhausts() {
        let mut ticker = Ticker::new(INTERVAL, Repeat::Times(2));

        ticker.channel().recv_timeout(WAIT).unwrap();
        assert!(ticker.tick());
        ticker.channel().recv_timeout(WAIT).unwrap();
        assert!(ticker.tick());

        assert!(!ticker.tick());
        assert!(ticker.channel().recv_timeout(Duration::from_millis(20)).is_err());
    }

    #[test]
    fn zero_times_never_fires() {
        let ticker = Ticker::new(INTERVAL, Repeat::Times(0));
        assert!(ticker.channel().recv_timeout(Duration::from_millis(20)).is_err());
    }
}
