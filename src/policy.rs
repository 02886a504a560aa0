//! Write policies: what a push does when the queue is full.
//!
//! Policies are zero-sized types selected by a type parameter of [`Queue`](crate::Queue),
//! so the choice costs nothing at runtime.

use crate::{raw::RawQueue, storage::Storage};
use core::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// Behavior of a push into a full queue.
pub trait WritePolicy: sealed::Sealed + Copy + Default + Debug + 'static {
    /// Whether a push into a full queue evicts the oldest item.
    const OVERWRITE: bool;

    /// Pushes `elem` into `raw` according to the policy.
    ///
    /// # Safety
    ///
    /// The caller must own the write end of `raw`.
    /// If [`Self::OVERWRITE`] is `true` the caller must own the read end too.
    unsafe fn push<S: Storage>(raw: &RawQueue<S>, elem: S::Item) -> Result<(), S::Item>;
}

/// Reject new items when the queue is full.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct NoOverwrite;

impl sealed::Sealed for NoOverwrite {}
impl WritePolicy for NoOverwrite {
    const OVERWRITE: bool = false;

    #[inline]
    unsafe fn push<S: Storage>(raw: &RawQueue<S>, elem: S::Item) -> Result<(), S::Item> {
        raw.push(elem)
    }
}

/// Evict the oldest item to make room for a new one when the queue is full.
///
/// A push never fails under this policy.
///
/// Eviction advances the read cursor from the producer side. To keep one writer per cursor,
/// a queue with this policy cannot be split into producer and consumer halves:
/// it is operated through `&mut` access to the whole queue only.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Overwrite;

impl sealed::Sealed for Overwrite {}
impl WritePolicy for Overwrite {
    const OVERWRITE: bool = true;

    #[inline]
    unsafe fn push<S: Storage>(raw: &RawQueue<S>, elem: S::Item) -> Result<(), S::Item> {
        raw.push_overwrite(elem);
        Ok(())
    }
}
