use std::thread;
use std::time::{Duration, Instant};

/// Parameters for one bounded polling wait.
#[derive(Debug, Clone)]
pub enum ElementPoller {
    /// No polling, just poll once.
    NoWait,
    /// Poll up to the specified timeout, with the specified interval between
    /// polls.
    TimeoutWithInterval(Duration, Duration),
    /// Poll the specified number of times, with the specified interval
    /// between polls.
    NumTriesWithInterval(u32, Duration),
    /// Poll up to the specified timeout, with the specified interval, but
    /// at least the specified number of times.
    TimeoutWithIntervalAndMinTries(Duration, Duration, u32),
}

impl Default for ElementPoller {
    /// The single timeout policy shared by all waits: 10 seconds, polling
    /// every 500 milliseconds.
    fn default() -> Self {
        ElementPoller::TimeoutWithInterval(Duration::from_secs(10), Duration::from_millis(500))
    }
}

pub struct ElementPollerTicker {
    timeout: Option<Duration>,
    interval: Option<Duration>,
    min_tries: u32,
    start: Instant,
    cur_tries: u32,
}

impl ElementPollerTicker {
    pub fn new(poller: ElementPoller) -> Self {
        let mut ticker = Self {
            timeout: None,
            interval: None,
            min_tries: 0,
            start: Instant::now(),
            cur_tries: 0,
        };

        match poller {
            ElementPoller::NoWait => {}
            ElementPoller::TimeoutWithInterval(timeout, interval) => {
                ticker.timeout = Some(timeout);
                ticker.interval = Some(interval);
            }
            ElementPoller::NumTriesWithInterval(num_tries, interval) => {
                ticker.interval = Some(interval);
                ticker.min_tries = num_tries;
            }
            ElementPoller::TimeoutWithIntervalAndMinTries(timeout, interval, num_tries) => {
                ticker.timeout = Some(timeout);
                ticker.interval = Some(interval);
                ticker.min_tries = num_tries
            }
        }

        ticker
    }

    pub fn tick(&mut self) -> bool {
        self.cur_tries += 1;

        if self.timeout.filter(|t| &self.start.elapsed() < t).is_none()
            && self.cur_tries >= self.min_tries
        {
            return false;
        }

        if let Some(i) = self.interval {
            // Next poll is due no earlier than this long after the first poll started.
            let minimum_elapsed = i * self.cur_tries;

            // But this much time has elapsed since the first poll started.
            let actual_elapsed = self.start.elapsed();

            if actual_elapsed < minimum_elapsed {
                // So we need to wait this much longer.
                thread::sleep(minimum_elapsed - actual_elapsed);
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_wait_stops_after_one_poll() {
        let mut ticker = ElementPollerTicker::new(ElementPoller::NoWait);
        assert!(!ticker.tick());
    }

    #[test]
    fn num_tries_allows_exactly_that_many_polls() {
        let mut ticker = ElementPollerTicker::new(ElementPoller::NumTriesWithInterval(
            3,
            Duration::from_millis(1),
        ));
        // The first poll happens before tick() is called, so two more are
        // allowed before the ticker gives up.
        assert!(ticker.tick());
        assert!(ticker.tick());
        assert!(!ticker.tick());
    }

    #[test]
    fn timeout_expires() {
        let mut ticker = ElementPollerTicker::new(ElementPoller::TimeoutWithInterval(
            Duration::from_millis(10),
            Duration::from_millis(5),
        ));
        let mut ticks = 0;
        while ticker.tick() {
            ticks += 1;
            assert!(ticks < 100, "ticker did not expire");
        }
    }
}
