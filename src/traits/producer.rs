use super::Observer;
#[cfg(feature = "std")]
use crate::wait::TimeoutIterator;
use crossbeam_utils::Backoff;
#[cfg(feature = "std")]
use std::time::Duration;

/// Producer part of a queue.
///
/// Only [`Self::push`] is required, every other method is a combinator over it.
pub trait Producer: Observer {
    /// Appends an item to the queue.
    ///
    /// If the queue cannot accept the item returns an `Err` containing it.
    /// Whether a full queue accepts the item depends on its [`WritePolicy`](crate::WritePolicy).
    fn push(&mut self, elem: Self::Item) -> Result<(), Self::Item>;

    /// Appends an item, retrying until it is accepted.
    ///
    /// *The runtime is unbounded: the call never returns if the queue stays full.*
    /// Use it only if the consumer is known to make progress.
    fn push_wait(&mut self, mut elem: Self::Item) {
        let backoff = Backoff::new();
        loop {
            elem = match self.push(elem) {
                Ok(()) => return,
                Err(elem) => elem,
            };
            backoff.snooze();
        }
    }

    /// Appends an item making at most `tries` attempts.
    ///
    /// Zero `tries` always fails. On failure the item is returned back.
    fn push_wait_for(&mut self, mut elem: Self::Item, tries: usize) -> Result<(), Self::Item> {
        let backoff = Backoff::new();
        for _ in 0..tries {
            elem = match self.push(elem) {
                Ok(()) => return Ok(()),
                Err(elem) => elem,
            };
            backoff.spin();
        }
        Err(elem)
    }

    /// Appends an item, retrying until it is accepted or `timeout` elapses.
    ///
    /// At least one attempt is made. Attempts run in the calling thread,
    /// so on timeout nothing has been written and the item is returned back.
    #[cfg(feature = "std")]
    fn push_wait_timeout(&mut self, mut elem: Self::Item, timeout: Duration) -> Result<(), Self::Item> {
        let backoff = Backoff::new();
        for _ in TimeoutIterator::new(timeout) {
            elem = match self.push(elem) {
                Ok(()) => return Ok(()),
                Err(elem) => elem,
            };
            backoff.snooze();
        }
        Err(elem)
    }

    /// Appends clones of `elems` in order, stopping at the first rejected one.
    ///
    /// Returns the number of items appended.
    fn push_range(&mut self, elems: &[Self::Item]) -> usize
    where
        Self::Item: Clone,
    {
        let mut count = 0;
        for elem in elems {
            if self.push(elem.clone()).is_err() {
                break;
            }
            count += 1;
        }
        count
    }

    /// Moves items out of `iter` while there is free space.
    ///
    /// The iterator is advanced only for items that are going to be appended,
    /// so the rest of the items stay in it.
    ///
    /// Returns the number of items appended.
    fn push_iter<I: Iterator<Item = Self::Item>>(&mut self, iter: &mut I) -> usize {
        // Free space seen by the producer can only grow.
        let vacant = self.vacant_len();
        let mut count = 0;
        for elem in iter.take(vacant) {
            let pushed = self.push(elem);
            debug_assert!(pushed.is_ok());
            if pushed.is_err() {
                break;
            }
            count += 1;
        }
        count
    }

    /// Appends clones of all `elems` in order, waiting for free space as needed.
    ///
    /// *The runtime is unbounded, see [`Self::push_wait`].*
    fn push_range_wait(&mut self, elems: &[Self::Item])
    where
        Self::Item: Clone,
    {
        for elem in elems {
            self.push_wait(elem.clone());
        }
    }
}
