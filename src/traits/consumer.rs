use super::Observer;
#[cfg(feature = "std")]
use crate::wait::TimeoutIterator;
use crossbeam_utils::Backoff;
#[cfg(feature = "std")]
use std::time::Duration;

/// Consumer part of a queue.
///
/// Only [`Self::pop`] and [`Self::clear`] are required, every other method is a combinator over `pop`.
pub trait Consumer: Observer {
    /// Removes the oldest item from the queue and returns it.
    ///
    /// Returns `None` if the queue is empty.
    fn pop(&mut self) -> Option<Self::Item>;

    /// Removes all items from the queue and drops them.
    ///
    /// Items pushed concurrently with this call may stay in the queue.
    ///
    /// Only the read end can clear: dropping items from the producer side would race the consumer reading the same slots.
    ///
    /// Returns the number of dropped items.
    fn clear(&mut self) -> usize;

    /// Removes the oldest item and stores it into `elem`.
    ///
    /// Returns `false` and leaves `elem` untouched if the queue is empty.
    fn pop_into(&mut self, elem: &mut Self::Item) -> bool {
        match self.pop() {
            Some(item) => {
                *elem = item;
                true
            }
            None => false,
        }
    }

    /// Removes the oldest item, retrying until one is available.
    ///
    /// *The runtime is unbounded: the call never returns if the queue stays empty.*
    /// Use it only if the producer is known to make progress.
    fn pop_wait(&mut self) -> Self::Item {
        let backoff = Backoff::new();
        loop {
            if let Some(item) = self.pop() {
                return item;
            }
            backoff.snooze();
        }
    }

    /// Same as [`Self::pop_wait`] but stores the item into `elem`.
    fn pop_wait_into(&mut self, elem: &mut Self::Item) {
        *elem = self.pop_wait();
    }

    /// Removes the oldest item making at most `tries` attempts.
    ///
    /// Zero `tries` always fails.
    fn pop_wait_for(&mut self, tries: usize) -> Option<Self::Item> {
        let backoff = Backoff::new();
        for _ in 0..tries {
            if let Some(item) = self.pop() {
                return Some(item);
            }
            backoff.spin();
        }
        None
    }

    /// Same as [`Self::pop_wait_for`] but stores the item into `elem`.
    ///
    /// Returns `false` and leaves `elem` untouched if all attempts failed.
    fn pop_wait_for_into(&mut self, elem: &mut Self::Item, tries: usize) -> bool {
        match self.pop_wait_for(tries) {
            Some(item) => {
                *elem = item;
                true
            }
            None => false,
        }
    }

    /// Removes the oldest item, retrying until one is available or `timeout` elapses.
    ///
    /// At least one attempt is made. Attempts run in the calling thread,
    /// so on timeout the queue is left as it was.
    #[cfg(feature = "std")]
    fn pop_wait_timeout(&mut self, timeout: Duration) -> Option<Self::Item> {
        let backoff = Backoff::new();
        for _ in TimeoutIterator::new(timeout) {
            if let Some(item) = self.pop() {
                return Some(item);
            }
            backoff.snooze();
        }
        None
    }

    /// Same as [`Self::pop_wait_timeout`] but stores the item into `elem`.
    ///
    /// `elem` is assigned only after a successful pop, so it is untouched on timeout.
    #[cfg(feature = "std")]
    fn pop_wait_timeout_into(&mut self, elem: &mut Self::Item, timeout: Duration) -> bool {
        match self.pop_wait_timeout(timeout) {
            Some(item) => {
                *elem = item;
                true
            }
            None => false,
        }
    }

    /// Removes items into `elems` in order, stopping when the queue is empty.
    ///
    /// Returns the number of items removed, the rest of `elems` is left untouched.
    fn pop_range(&mut self, elems: &mut [Self::Item]) -> usize {
        let mut count = 0;
        for elem in elems.iter_mut() {
            match self.pop() {
                Some(item) => *elem = item,
                None => break,
            }
            count += 1;
        }
        count
    }

    /// Fills the whole `elems` with removed items, waiting for them as needed.
    ///
    /// *The runtime is unbounded, see [`Self::pop_wait`].*
    fn pop_range_wait(&mut self, elems: &mut [Self::Item]) {
        for elem in elems.iter_mut() {
            *elem = self.pop_wait();
        }
    }

    /// Removes the oldest item and passes it to `f`.
    ///
    /// Returns `false` without calling `f` if the queue is empty.
    fn consume_with<F: FnOnce(Self::Item)>(&mut self, f: F) -> bool {
        match self.pop() {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Returns an iterator that removes items one by one until the queue is empty.
    fn pop_iter(&mut self) -> PopIter<'_, Self> {
        PopIter { target: self }
    }
}

/// An iterator that removes items from the queue.
pub struct PopIter<'a, C: Consumer + ?Sized> {
    target: &'a mut C,
}

impl<'a, C: Consumer + ?Sized> Iterator for PopIter<'a, C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.target.pop()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.len(), None)
    }
}
