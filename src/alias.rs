#[cfg(feature = "alloc")]
use super::storage::Heap;
use super::{
    halves::{Cons, Prod},
    policy::NoOverwrite,
    queue::Queue,
    storage::Array,
};

#[cfg(all(feature = "alloc", not(feature = "portable-atomic")))]
pub(crate) use alloc::sync::Arc;
#[cfg(all(feature = "alloc", feature = "portable-atomic"))]
pub(crate) use portable_atomic_util::Arc;

/// Queue with inline storage and static capacity.
///
/// *Capacity (`N`) must be greater than zero and less than `usize::MAX`.*
pub type StaticQueue<T, const N: usize, P = NoOverwrite> = Queue<Array<T, N>, P>;

/// Alias for [`StaticQueue`] producer.
pub type StaticProd<'a, T, const N: usize> = Prod<&'a StaticQueue<T, N>>;

/// Alias for [`StaticQueue`] consumer.
pub type StaticCons<'a, T, const N: usize> = Cons<&'a StaticQueue<T, N>>;

/// Heap-allocated queue.
#[cfg(feature = "alloc")]
pub type HeapQueue<T, P = NoOverwrite> = Queue<Heap<T>, P>;

#[cfg(feature = "alloc")]
/// Alias for [`HeapQueue`] producer.
///
/// The shared pointer inside is `alloc::sync::Arc` or `portable_atomic_util::Arc` depending on features,
/// it is not re-exported:
///
/// ```compile_fail
/// use lockfree_queue::Arc;
/// ```
pub type HeapProd<T> = Prod<Arc<HeapQueue<T>>>;

#[cfg(feature = "alloc")]
/// Alias for [`HeapQueue`] consumer.
pub type HeapCons<T> = Cons<Arc<HeapQueue<T>>>;
