use lockfree_queue::{traits::*, Overwrite, StaticQueue};

fn main() {
    let mut q = StaticQueue::<i32, 2, Overwrite>::new();

    assert_eq!(q.push_overwrite(0), None);
    assert_eq!(q.push_overwrite(1), None);
    assert_eq!(q.push_overwrite(2), Some(0));

    // Plain push evicts silently.
    assert_eq!(q.push(3), Ok(()));

    assert_eq!(q.pop(), Some(2));
    assert_eq!(q.pop(), Some(3));
    assert_eq!(q.pop(), None);
}
