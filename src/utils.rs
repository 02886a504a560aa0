use core::num::NonZeroUsize;

/// Slot index following `index` in a buffer of `len` slots.
#[inline]
pub fn next_index(index: usize, len: NonZeroUsize) -> usize {
    let next = index + 1;
    if next == len.get() {
        0
    } else {
        next
    }
}

/// Number of items between `read` and `write` cursors in a buffer of `len` slots.
///
/// Both cursors must be less than `len`, then the result is always less than `len`.
#[inline]
pub fn occupied_len(read: usize, write: usize, len: NonZeroUsize) -> usize {
    debug_assert!(read < len.get() && write < len.get());
    if write >= read {
        write - read
    } else {
        len.get() - read + write
    }
}
