use super::utils::modulus;
use crate::utils::{next_index, occupied_len};
use core::num::NonZeroUsize;

/// Queue observer.
///
/// Can observe queue state but cannot access its items.
///
/// *All values are snapshots: they may become irrelevant at any time because of concurring activity of the other side.*
pub trait Observer {
    type Item: Sized;

    /// Capacity of the queue.
    ///
    /// It is constant during the whole queue lifetime.
    fn capacity(&self) -> NonZeroUsize;

    /// Index of the oldest item.
    ///
    /// Index value is in range `0..=capacity`.
    fn read_index(&self) -> usize;
    /// Index of the slot the next item will be written to.
    ///
    /// Index value is in range `0..=capacity`.
    fn write_index(&self) -> usize;

    /// The number of items stored in the queue.
    ///
    /// *Actual number may be greater or less than returned value due to concurring activity of producer or consumer respectively.*
    #[inline]
    fn len(&self) -> usize {
        occupied_len(self.read_index(), self.write_index(), modulus(self))
    }

    /// The number of remaining free places in the queue.
    #[inline]
    fn vacant_len(&self) -> usize {
        self.capacity().get() - self.len()
    }

    /// Checks if the queue is empty.
    ///
    /// *The result may become irrelevant at any time because of concurring producer activity.*
    #[inline]
    fn is_empty(&self) -> bool {
        self.read_index() == self.write_index()
    }

    /// Checks if the queue is full.
    ///
    /// *The result may become irrelevant at any time because of concurring consumer activity.*
    #[inline]
    fn is_full(&self) -> bool {
        next_index(self.write_index(), modulus(self)) == self.read_index()
    }
}
