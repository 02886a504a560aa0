use crate::{policy::Overwrite, traits::*, StaticQueue};
#[cfg(feature = "alloc")]
use crate::HeapQueue;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

type Queue<T, const N: usize> = StaticQueue<T, N, Overwrite>;

#[test]
fn push_overwrite() {
    let mut q = Queue::<i32, 2>::new();

    assert_eq!(q.push_overwrite(0), None);
    assert_eq!(q.push_overwrite(1), None);
    assert_eq!(q.push_overwrite(2), Some(0));

    assert_eq!(q.pop(), Some(1));
    assert_eq!(q.pop(), Some(2));
    assert_eq!(q.pop(), None);
}

#[test]
fn push_never_fails() {
    const CAP: usize = 4;
    let mut q = Queue::<usize, CAP>::new();

    for i in 0..=CAP {
        assert_eq!(q.push(i), Ok(()));
    }
    assert!(q.is_full());
    assert_eq!(q.len(), CAP);

    for i in 1..=CAP {
        assert_eq!(q.pop(), Some(i));
    }
    assert_eq!(q.pop(), None);
}

#[test]
fn keeps_last() {
    const CAP: usize = 3;
    let mut q = Queue::<usize, CAP>::new();

    for i in 0..100 {
        assert_eq!(q.push(i), Ok(()));
        assert!(q.len() <= CAP);
    }
    for i in (100 - CAP)..100 {
        assert_eq!(q.pop(), Some(i));
    }
    assert!(q.is_empty());
}

#[test]
fn push_range() {
    let mut q = Queue::<i32, 2>::new();
    assert_eq!(q.push_range(&[0, 1, 2, 3, 4, 5]), 6);
    assert_eq!(q.pop(), Some(4));
    assert_eq!(q.pop(), Some(5));
    assert_eq!(q.pop(), None);
}

#[test]
fn from_iter() {
    let mut q: Queue<i32, 3> = (0..10).collect();
    assert_eq!(q.len(), 3);
    assert_eq!(q.pop(), Some(7));
    assert_eq!(q.pop(), Some(8));
    assert_eq!(q.pop(), Some(9));
}

#[test]
fn clear_after_overwrite() {
    let mut q = Queue::<i32, 2>::new();
    q.push_range(&[1, 2, 3]);
    assert_eq!(q.clear(), 2);
    assert!(q.is_empty());
    assert_eq!(q.push_overwrite(4), None);
    assert_eq!(q.pop(), Some(4));
}

#[cfg(feature = "alloc")]
#[test]
fn heap() {
    let mut q = HeapQueue::<i32, Overwrite>::new(2);
    q.extend([0, 1, 2, 3, 4, 5]);
    assert_eq!(q.pop_iter().collect::<Vec<_>>(), [4, 5]);
}
