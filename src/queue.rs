use crate::{
    halves::{Cons, Prod},
    policy::{NoOverwrite, Overwrite, WritePolicy},
    raw::RawQueue,
    storage::{Array, Storage},
    traits::{Consumer, Observer, Producer, SplitRef},
};
#[cfg(feature = "alloc")]
use crate::{alias::Arc, storage::Heap, traits::Split};
#[cfg(feature = "alloc")]
use alloc::collections::TryReserveError;
use core::{fmt, marker::PhantomData, num::NonZeroUsize};

/// Fixed-capacity lock-free queue.
///
/// Binds item type and capacity (through storage `S`) with a write policy `P`.
///
/// Owning the queue gives access to both ends. To use it from a producer thread and a consumer thread
/// split it with [`Split::split`] or [`SplitRef::split_ref`] (available for [`NoOverwrite`] queues only).
///
#[cfg_attr(
    feature = "std",
    doc = r##"
```
use std::thread;
use lockfree_queue::{HeapQueue, traits::*};

let q = HeapQueue::<i32>::new(256);
let (mut prod, mut cons) = q.split();
thread::spawn(move || {
    prod.push(123).unwrap();
})
.join()
.unwrap();
thread::spawn(move || {
    assert_eq!(cons.pop(), Some(123));
})
.join()
.unwrap();
```
"##
)]
pub struct Queue<S: Storage, P: WritePolicy = NoOverwrite> {
    raw: RawQueue<S>,
    _policy: PhantomData<P>,
}

impl<S: Storage, P: WritePolicy> Queue<S, P> {
    /// Creates an empty queue over `storage`.
    pub const fn from_storage(storage: S) -> Self {
        Self {
            raw: RawQueue::new(storage),
            _policy: PhantomData,
        }
    }

    /// Underlying ring buffer core.
    #[inline]
    pub fn as_raw(&self) -> &RawQueue<S> {
        &self.raw
    }
}

impl<T, const N: usize, P: WritePolicy> Queue<Array<T, N>, P> {
    /// Creates an empty queue with inline storage.
    ///
    /// *Fails to compile if `N` is zero.*
    pub const fn new() -> Self {
        Self::from_storage(Array::new())
    }
}

impl<T, const N: usize, P: WritePolicy> Default for Queue<Array<T, N>, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "alloc")]
impl<T, P: WritePolicy> Queue<Heap<T>, P> {
    /// Creates an empty queue allocating storage for `capacity` items.
    ///
    /// *Panics if allocation failed or `capacity` is zero.*
    pub fn new(capacity: usize) -> Self {
        Self::from_storage(Heap::new(capacity))
    }

    /// Creates an empty queue returning an error if allocation failed.
    ///
    /// *Panics if `capacity` is zero.*
    pub fn try_new(capacity: usize) -> Result<Self, TryReserveError> {
        Heap::try_new(capacity).map(Self::from_storage)
    }
}

impl<S: Storage> Queue<S, Overwrite> {
    /// Pushes an item evicting the oldest one if the queue is full.
    ///
    /// Returns the evicted item if eviction took place.
    pub fn push_overwrite(&mut self, elem: S::Item) -> Option<S::Item> {
        unsafe { self.raw.push_overwrite(elem) }
    }
}

impl<S: Storage, P: WritePolicy> Observer for Queue<S, P> {
    type Item = S::Item;

    #[inline]
    fn capacity(&self) -> NonZeroUsize {
        self.raw.capacity()
    }
    #[inline]
    fn read_index(&self) -> usize {
        self.raw.read_index()
    }
    #[inline]
    fn write_index(&self) -> usize {
        self.raw.write_index()
    }
}

impl<S: Storage, P: WritePolicy> Producer for Queue<S, P> {
    #[inline]
    fn push(&mut self, elem: S::Item) -> Result<(), S::Item> {
        // `&mut self` owns both ends.
        unsafe { P::push(&self.raw, elem) }
    }
}

impl<S: Storage, P: WritePolicy> Consumer for Queue<S, P> {
    #[inline]
    fn pop(&mut self) -> Option<S::Item> {
        unsafe { self.raw.pop() }
    }
    #[inline]
    fn clear(&mut self) -> usize {
        unsafe { self.raw.clear() }
    }
}

/// Pushes every item in order, items the queue rejects are dropped.
impl<S: Storage, P: WritePolicy> Extend<S::Item> for Queue<S, P> {
    fn extend<I: IntoIterator<Item = S::Item>>(&mut self, iter: I) {
        for elem in iter {
            let _ = self.push(elem);
        }
    }
}

impl<T, const N: usize, P: WritePolicy> FromIterator<T> for Queue<Array<T, N>, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

/// Queue with the capacity of the array, filled with its items.
impl<T, const N: usize, P: WritePolicy> From<[T; N]> for Queue<Array<T, N>, P> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

#[cfg(feature = "alloc")]
impl<S: Storage> Split for Queue<S, NoOverwrite> {
    type Prod = Prod<Arc<Self>>;
    type Cons = Cons<Arc<Self>>;

    fn split(self) -> (Self::Prod, Self::Cons) {
        let arc = Arc::new(self);
        unsafe { (Prod::new(arc.clone()), Cons::new(arc)) }
    }
}

impl<S: Storage> SplitRef for Queue<S, NoOverwrite> {
    type RefProd<'a> = Prod<&'a Self> where Self: 'a;
    type RefCons<'a> = Cons<&'a Self> where Self: 'a;

    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>) {
        let this: &Self = self;
        unsafe { (Prod::new(this), Cons::new(this)) }
    }
}

impl<S: Storage, P: WritePolicy> fmt::Debug for Queue<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("policy", &P::default())
            .field("capacity", &self.capacity())
            .field("read_index", &self.read_index())
            .field("write_index", &self.write_index())
            .field("len", &self.len())
            .finish()
    }
}
