use std::time::{Duration, Instant};

/// Attempts of an operation bounded by a wall-clock timeout.
///
/// Yields the remaining time before each attempt.
/// The first attempt is always yielded, even for a zero timeout.
#[derive(Clone, Debug)]
pub(crate) struct TimeoutIterator {
    start: Instant,
    timeout: Duration,
    first: bool,
}

impl TimeoutIterator {
    pub fn new(timeout: Duration) -> Self {
        Self {
            start: Instant::now(),
            timeout,
            first: true,
        }
    }
}

impl Iterator for TimeoutIterator {
    type Item = Duration;
    fn next(&mut self) -> Option<Self::Item> {
        let elapsed = self.start.elapsed();
        if self.first {
            self.first = false;
            Some(self.timeout.saturating_sub(elapsed))
        } else if self.timeout > elapsed {
            Some(self.timeout - elapsed)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn zero_timeout_yields_once() {
        let mut iter = TimeoutIterator::new(Duration::ZERO);
        assert_eq!(iter.next(), Some(Duration::ZERO));
        assert_eq!(iter.next(), None);
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn expires() {
        let timeout = Duration::from_millis(20);
        let mut iter = TimeoutIterator::new(timeout);
        assert!(iter.next().unwrap() <= timeout);
        sleep(timeout);
        assert_eq!(iter.next(), None);
    }
}
