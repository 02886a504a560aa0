#![no_std]

use lock_free_static::OnceMut;
use lockfree_queue::{traits::*, StaticQueue};

static QUEUE: OnceMut<StaticQueue<i32, 1>> = OnceMut::new();

fn main() {
    QUEUE.set(StaticQueue::default()).ok().expect("QUEUE already initialized");

    let (mut prod, mut cons) = QUEUE
        .get_mut()
        .expect("Mutable reference to QUEUE already taken")
        .split_ref();

    assert_eq!(prod.push(123), Ok(()));
    assert_eq!(prod.push(321), Err(321));

    assert_eq!(cons.pop(), Some(123));
    assert_eq!(cons.pop(), None);
}
