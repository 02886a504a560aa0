//! Slot buffers backing a queue.
//!
//! A queue of capacity `N` needs `N + 1` slots: the extra one is the sentinel
//! slot that keeps the "empty" and "full" states distinguishable by comparing
//! cursors only.

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, collections::TryReserveError, vec::Vec};
use core::{cell::UnsafeCell, mem::MaybeUninit, num::NonZeroUsize};

/// Single slot of the buffer.
///
/// Slots are written by the producer and read by the consumer through shared references,
/// ownership of a slot is defined by the queue cursors.
pub type Slot<T> = UnsafeCell<MaybeUninit<T>>;

/// Abstract slot buffer.
///
/// # Safety
///
/// [`Self::len`] must be constant during the whole storage lifetime and must be greater than one.
///
/// [`Self::slot`] must return the same slot for the same index and distinct slots for distinct indices.
pub unsafe trait Storage {
    type Item: Sized;

    /// Number of slots, equals to `capacity + 1`.
    fn len(&self) -> NonZeroUsize;

    /// Slot at `index`.
    ///
    /// *`index` must be less than [`Self::len`], in debug mode panics otherwise.*
    fn slot(&self, index: usize) -> &Slot<Self::Item>;

    /// Capacity of the queue using this storage.
    #[inline]
    fn capacity(&self) -> NonZeroUsize {
        unsafe { NonZeroUsize::new_unchecked(self.len().get() - 1) }
    }
}

/// Inline storage for `N` items.
///
/// Never allocates, so a queue built on it can live on the stack or in a `static`.
///
/// *`N` must be greater than zero and less than `usize::MAX`, otherwise [`Self::new`] fails to compile.*
///
/// ```compile_fail
/// use lockfree_queue::StaticQueue;
///
/// let _ = StaticQueue::<(), { usize::MAX }>::new();
/// ```
pub struct Array<T, const N: usize> {
    slots: [Slot<T>; N],
    sentinel: Slot<T>,
}

impl<T, const N: usize> Array<T, N> {
    const VACANT: Slot<T> = UnsafeCell::new(MaybeUninit::uninit());
    const VALID_CAPACITY: () = assert!(
        N > 0 && N < usize::MAX,
        "queue capacity must be in range `1..usize::MAX`"
    );

    /// Creates storage with all slots vacant.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_CAPACITY;
        Self {
            slots: [Self::VACANT; N],
            sentinel: Self::VACANT,
        }
    }
}

impl<T, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl<T, const N: usize> Storage for Array<T, N> {
    type Item = T;

    #[inline]
    fn len(&self) -> NonZeroUsize {
        unsafe { NonZeroUsize::new_unchecked(N + 1) }
    }

    #[inline]
    fn slot(&self, index: usize) -> &Slot<T> {
        debug_assert!(index <= N);
        if index < N {
            unsafe { self.slots.get_unchecked(index) }
        } else {
            &self.sentinel
        }
    }
}

/// Heap-allocated storage.
///
/// The slots are allocated once on construction.
#[cfg(feature = "alloc")]
pub struct Heap<T> {
    slots: Box<[Slot<T>]>,
}

#[cfg(feature = "alloc")]
impl<T> Heap<T> {
    /// Allocates storage for `capacity` items.
    ///
    /// *Panics if `capacity` is zero or `usize::MAX`, or allocation failed.*
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be greater than zero");
        let len = capacity.checked_add(1).expect("queue capacity overflow");
        Self {
            slots: (0..len).map(|_| UnsafeCell::new(MaybeUninit::uninit())).collect(),
        }
    }

    /// Allocates storage for `capacity` items returning an error if allocation failed.
    ///
    /// *Panics if `capacity` is zero or `usize::MAX`.*
    pub fn try_new(capacity: usize) -> Result<Self, TryReserveError> {
        assert!(capacity > 0, "queue capacity must be greater than zero");
        let len = capacity.checked_add(1).expect("queue capacity overflow");
        let mut slots = Vec::<Slot<T>>::new();
        slots.try_reserve_exact(len)?;
        slots.extend((0..len).map(|_| UnsafeCell::new(MaybeUninit::uninit())));
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }
}

#[cfg(feature = "alloc")]
unsafe impl<T> Storage for Heap<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> NonZeroUsize {
        unsafe { NonZeroUsize::new_unchecked(self.slots.len()) }
    }

    #[inline]
    fn slot(&self, index: usize) -> &Slot<T> {
        debug_assert!(index < self.slots.len());
        unsafe { self.slots.get_unchecked(index) }
    }
}
