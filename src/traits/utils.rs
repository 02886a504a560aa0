use super::Observer;
use core::num::NonZeroUsize;

/// Modulus for cursors of a queue.
///
/// Equals to `capacity + 1`, the number of slots including the sentinel one.
#[inline]
pub fn modulus(this: &(impl Observer + ?Sized)) -> NonZeroUsize {
    unsafe { NonZeroUsize::new_unchecked(this.capacity().get() + 1) }
}
