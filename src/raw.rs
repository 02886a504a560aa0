//! Ring buffer core.
//!
//! # Details
//!
//! The core consists of a slot buffer of `capacity + 1` slots and two cursors: `read` and `write`.
//! An item is appended at the `write` slot and `write` is advanced after that.
//! An item is extracted from the `read` slot and `read` is advanced after that.
//! Both cursors wrap modulo `capacity + 1`.
//!
//! The buffer is empty when `read == write` and full when the slot following `write` is `read`,
//! so one slot always stays vacant. It allows us to tell the states apart without a separate counter.
//!
//! Slots in the cyclic range `read..write` hold initialized items, all others are uninitialized.
//!
//! # Memory ordering
//!
//! Each side publishes its cursor with a `Release` store after it is done with the slot,
//! the opposite side loads it with `Acquire` before touching the slot.
//! So the item written by the producer is visible to the consumer once it observes the new `write`,
//! and the slot is never reused by the producer before the consumer has moved the item out.

use crate::{
    storage::Storage,
    utils::{next_index, occupied_len},
};
#[cfg(not(feature = "portable-atomic"))]
use core::sync::atomic::AtomicUsize;
use core::{fmt, num::NonZeroUsize, ptr, sync::atomic::Ordering};
use crossbeam_utils::CachePadded;
#[cfg(feature = "portable-atomic")]
use portable_atomic::AtomicUsize;

/// Storage with a pair of atomic cursors.
///
/// All methods take `&self`, so the core can be shared between threads.
/// Which methods a thread may call is governed by the end it owns (see safety sections).
pub struct RawQueue<S: Storage> {
    storage: S,
    read_index: CachePadded<AtomicUsize>,
    write_index: CachePadded<AtomicUsize>,
}

unsafe impl<S: Storage> Sync for RawQueue<S> where S::Item: Send {}

impl<S: Storage> RawQueue<S> {
    /// Creates an empty core over `storage`.
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            read_index: CachePadded::new(AtomicUsize::new(0)),
            write_index: CachePadded::new(AtomicUsize::new(0)),
        }
    }

    /// Maximum number of items.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.storage.capacity()
    }

    /// Index of the oldest item, in range `0..=capacity`.
    #[inline]
    pub fn read_index(&self) -> usize {
        self.read_index.load(Ordering::Acquire)
    }
    /// Index of the slot the next item will be written to, in range `0..=capacity`.
    #[inline]
    pub fn write_index(&self) -> usize {
        self.write_index.load(Ordering::Acquire)
    }

    /// The number of items at the moment.
    ///
    /// *Under concurrent access the value may be stale, but it is always in range `0..=capacity`.*
    #[inline]
    pub fn len(&self) -> usize {
        occupied_len(self.read_index(), self.write_index(), self.storage.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read_index() == self.write_index()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        next_index(self.write_index(), self.storage.len()) == self.read_index()
    }

    /// Appends an item at the write end.
    ///
    /// Returns the item back if the buffer is full. State is not changed in that case.
    ///
    /// # Safety
    ///
    /// Must be called only by the owner of the write end and never concurrently.
    pub unsafe fn push(&self, elem: S::Item) -> Result<(), S::Item> {
        let write = self.write_index.load(Ordering::Relaxed);
        let next = next_index(write, self.storage.len());
        if next == self.read_index.load(Ordering::Acquire) {
            return Err(elem);
        }
        (*self.storage.slot(write).get()).write(elem);
        self.write_index.store(next, Ordering::Release);
        Ok(())
    }

    /// Removes the oldest item at the read end.
    ///
    /// Returns `None` if the buffer is empty.
    ///
    /// # Safety
    ///
    /// Must be called only by the owner of the read end and never concurrently.
    pub unsafe fn pop(&self) -> Option<S::Item> {
        let read = self.read_index.load(Ordering::Relaxed);
        if read == self.write_index.load(Ordering::Acquire) {
            return None;
        }
        let elem = (*self.storage.slot(read).get()).assume_init_read();
        self.read_index
            .store(next_index(read, self.storage.len()), Ordering::Release);
        Some(elem)
    }

    /// Drops all items present at the moment of the call and moves `read` to the observed `write`.
    ///
    /// Items pushed concurrently may remain in the buffer.
    ///
    /// Returns the number of dropped items.
    ///
    /// # Safety
    ///
    /// Must be called only by the owner of the read end and never concurrently.
    pub unsafe fn clear(&self) -> usize {
        let len = self.storage.len();
        let mut read = self.read_index.load(Ordering::Acquire);
        let write = self.write_index.load(Ordering::Acquire);

        let mut index = read;
        let mut count = 0;
        while index != write {
            ptr::drop_in_place((*self.storage.slot(index).get()).as_mut_ptr());
            index = next_index(index, len);
            count += 1;
        }

        // Weak CAS: a spurious failure just repeats the loop with the fresh value.
        while let Err(current) =
            self.read_index
                .compare_exchange_weak(read, write, Ordering::AcqRel, Ordering::Acquire)
        {
            debug_assert!(occupied_len(current, write, len) <= occupied_len(read, write, len));
            read = current;
        }
        count
    }

    /// Pushes an item evicting the oldest one if the buffer is full.
    ///
    /// Returns the evicted item.
    ///
    /// # Safety
    ///
    /// The caller must own *both* ends: the eviction moves the `read` cursor from the producer side.
    pub unsafe fn push_overwrite(&self, elem: S::Item) -> Option<S::Item> {
        let evicted = if self.is_full() { self.evict() } else { None };
        let pushed = self.push(elem);
        debug_assert!(pushed.is_ok());
        evicted
    }

    /// Discards the oldest item by advancing `read` with compare-and-swap.
    ///
    /// # Safety
    ///
    /// Same as [`Self::push_overwrite`].
    unsafe fn evict(&self) -> Option<S::Item> {
        let len = self.storage.len();
        let mut read = self.read_index.load(Ordering::Acquire);
        loop {
            if read == self.write_index.load(Ordering::Acquire) {
                return None;
            }
            match self.read_index.compare_exchange_weak(
                read,
                next_index(read, len),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                // The slot is not reused until the next push, which is ours.
                Ok(_) => return Some((*self.storage.slot(read).get()).assume_init_read()),
                Err(current) => read = current,
            }
        }
    }
}

impl<S: Storage> Drop for RawQueue<S> {
    fn drop(&mut self) {
        unsafe { self.clear() };
    }
}

impl<S: Storage> fmt::Debug for RawQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawQueue")
            .field("capacity", &self.capacity())
            .field("read_index", &self.read_index())
            .field("write_index", &self.write_index())
            .field("len", &self.len())
            .finish()
    }
}
