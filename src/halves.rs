//! Producer and consumer halves of a split queue.

#[cfg(feature = "alloc")]
use crate::alias::Arc;
use crate::{
    policy::NoOverwrite,
    queue::Queue,
    storage::Storage,
    traits::{Consumer, Observer, Producer},
};
use core::{fmt, num::NonZeroUsize};

/// Shared reference to a splittable queue.
pub trait QueueRef {
    type Storage: Storage;

    fn queue(&self) -> &Queue<Self::Storage, NoOverwrite>;
}

impl<'a, S: Storage> QueueRef for &'a Queue<S, NoOverwrite> {
    type Storage = S;

    #[inline]
    fn queue(&self) -> &Queue<S, NoOverwrite> {
        self
    }
}

#[cfg(feature = "alloc")]
impl<S: Storage> QueueRef for Arc<Queue<S, NoOverwrite>> {
    type Storage = S;

    #[inline]
    fn queue(&self) -> &Queue<S, NoOverwrite> {
        self
    }
}

/// Write end of a queue.
///
/// Only this handle moves the write cursor.
pub struct Prod<R: QueueRef> {
    queue: R,
}

/// Read end of a queue.
///
/// Only this handle moves the read cursor.
pub struct Cons<R: QueueRef> {
    queue: R,
}

impl<R: QueueRef> Prod<R> {
    /// # Safety
    ///
    /// There must be no more than one producer of the queue.
    pub unsafe fn new(queue: R) -> Self {
        Self { queue }
    }
    pub fn queue(&self) -> &R {
        &self.queue
    }
    pub fn into_queue(self) -> R {
        self.queue
    }
}

impl<R: QueueRef> Cons<R> {
    /// # Safety
    ///
    /// There must be no more than one consumer of the queue.
    pub unsafe fn new(queue: R) -> Self {
        Self { queue }
    }
    pub fn queue(&self) -> &R {
        &self.queue
    }
    pub fn into_queue(self) -> R {
        self.queue
    }
}

macro_rules! impl_observer {
    ($type:ident) => {
        impl<R: QueueRef> Observer for $type<R> {
            type Item = <R::Storage as Storage>::Item;

            #[inline]
            fn capacity(&self) -> NonZeroUsize {
                self.queue.queue().capacity()
            }
            #[inline]
            fn read_index(&self) -> usize {
                self.queue.queue().read_index()
            }
            #[inline]
            fn write_index(&self) -> usize {
                self.queue.queue().write_index()
            }
        }

        impl<R: QueueRef> fmt::Debug for $type<R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($type))
                    .field("capacity", &self.capacity())
                    .field("read_index", &self.read_index())
                    .field("write_index", &self.write_index())
                    .field("len", &self.len())
                    .finish()
            }
        }
    };
}

impl_observer!(Prod);
impl_observer!(Cons);

impl<R: QueueRef> Producer for Prod<R> {
    #[inline]
    fn push(&mut self, elem: Self::Item) -> Result<(), Self::Item> {
        unsafe { self.queue.queue().as_raw().push(elem) }
    }
}

impl<R: QueueRef> Consumer for Cons<R> {
    #[inline]
    fn pop(&mut self) -> Option<Self::Item> {
        unsafe { self.queue.queue().as_raw().pop() }
    }
    #[inline]
    fn clear(&mut self) -> usize {
        unsafe { self.queue.queue().as_raw().clear() }
    }
}

impl<R: QueueRef> Iterator for Cons<R> {
    type Item = <R::Storage as Storage>::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Consumer::pop(self)
    }
}
