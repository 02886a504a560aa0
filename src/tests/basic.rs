use super::Queue;
use crate::traits::*;

fn indices(this: &impl Observer) -> (usize, usize) {
    (this.read_index(), this.write_index())
}

#[test]
fn capacity() {
    const CAP: usize = 13;
    let q = Queue::<i32, CAP>::default();
    assert_eq!(q.capacity().get(), CAP);
}

#[test]
fn split_capacity() {
    const CAP: usize = 13;
    let mut q = Queue::<i32, CAP>::default();
    let (prod, cons) = q.split_ref();

    assert_eq!(prod.capacity().get(), CAP);
    assert_eq!(cons.capacity().get(), CAP);
}

#[test]
fn push() {
    let mut q = Queue::<i32, 2>::default();
    let (mut prod, _) = q.split_ref();

    assert_eq!(indices(&prod), (0, 0));

    assert_eq!(prod.push(123), Ok(()));
    assert_eq!(indices(&prod), (0, 1));

    assert_eq!(prod.push(234), Ok(()));
    assert_eq!(indices(&prod), (0, 2));

    assert_eq!(prod.push(345), Err(345));
    assert_eq!(indices(&prod), (0, 2));
}

#[test]
fn pop_empty() {
    let mut q = Queue::<i32, 2>::default();
    let (_, mut cons) = q.split_ref();

    assert_eq!(indices(&cons), (0, 0));

    assert_eq!(cons.pop(), None);
    assert_eq!(indices(&cons), (0, 0));
}

#[test]
fn push_pop_one() {
    const CAP: usize = 2;
    let mut q = Queue::<i32, CAP>::default();
    let (mut prod, mut cons) = q.split_ref();

    const MOD: usize = CAP + 1;
    let values = [12, 34, 56, 78, 90];
    assert_eq!(indices(&cons), (0, 0));

    for (i, v) in values.iter().enumerate() {
        assert_eq!(prod.push(*v), Ok(()));
        assert_eq!(indices(&cons), (i % MOD, (i + 1) % MOD));

        assert_eq!(cons.pop().unwrap(), *v);
        assert_eq!(indices(&cons), ((i + 1) % MOD, (i + 1) % MOD));

        assert_eq!(cons.pop(), None);
        assert_eq!(indices(&cons), ((i + 1) % MOD, (i + 1) % MOD));
    }
}

#[test]
fn push_pop_all() {
    const CAP: usize = 2;
    let mut q = Queue::<i32, CAP>::default();
    let (mut prod, mut cons) = q.split_ref();

    const MOD: usize = CAP + 1;
    let values = [(12, 34, 13), (56, 78, 57), (90, 10, 91)];
    assert_eq!(indices(&cons), (0, 0));

    for (i, v) in values.iter().enumerate() {
        assert_eq!(prod.push(v.0), Ok(()));
        assert_eq!(indices(&cons), (CAP * i % MOD, (CAP * i + 1) % MOD));

        assert_eq!(prod.push(v.1), Ok(()));
        assert_eq!(indices(&cons), (CAP * i % MOD, (CAP * i + 2) % MOD));

        assert_eq!(prod.push(v.2).unwrap_err(), v.2);
        assert_eq!(indices(&cons), (CAP * i % MOD, (CAP * i + 2) % MOD));

        assert_eq!(cons.pop().unwrap(), v.0);
        assert_eq!(indices(&cons), ((CAP * i + 1) % MOD, (CAP * i + 2) % MOD));

        assert_eq!(cons.pop().unwrap(), v.1);
        assert_eq!(indices(&cons), ((CAP * i + 2) % MOD, (CAP * i + 2) % MOD));

        assert_eq!(cons.pop(), None);
        assert_eq!(indices(&cons), ((CAP * i + 2) % MOD, (CAP * i + 2) % MOD));
    }
}

#[test]
fn empty_full() {
    let mut q = Queue::<i32, 1>::default();
    let (mut prod, cons) = q.split_ref();

    assert!(prod.is_empty());
    assert!(cons.is_empty());
    assert!(!prod.is_full());
    assert!(!cons.is_full());

    assert_eq!(prod.push(123), Ok(()));

    assert!(!prod.is_empty());
    assert!(!cons.is_empty());
    assert!(prod.is_full());
    assert!(cons.is_full());
}

#[test]
fn len_vacant() {
    let mut q = Queue::<i32, 2>::default();
    let (mut prod, mut cons) = q.split_ref();

    assert_eq!(prod.len(), 0);
    assert_eq!(cons.len(), 0);
    assert_eq!(prod.vacant_len(), 2);
    assert_eq!(cons.vacant_len(), 2);

    assert_eq!(prod.push(123), Ok(()));

    assert_eq!(prod.len(), 1);
    assert_eq!(cons.len(), 1);
    assert_eq!(prod.vacant_len(), 1);
    assert_eq!(cons.vacant_len(), 1);

    assert_eq!(prod.push(456), Ok(()));

    assert_eq!(prod.len(), 2);
    assert_eq!(cons.len(), 2);
    assert_eq!(prod.vacant_len(), 0);
    assert_eq!(cons.vacant_len(), 0);

    assert_eq!(cons.pop(), Some(123));

    assert_eq!(prod.len(), 1);
    assert_eq!(cons.len(), 1);

    assert_eq!(cons.pop(), Some(456));

    assert_eq!(prod.len(), 0);
    assert_eq!(cons.vacant_len(), 2);
}

#[test]
fn fill_and_drain() {
    const CAP: usize = 25;
    let mut q = Queue::<usize, CAP>::new();

    assert!(q.is_empty());
    for i in 0..CAP {
        assert!(!q.is_full());
        let len = q.len();
        assert_eq!(q.push(i), Ok(()));
        assert_eq!(q.len(), len + 1);
    }
    assert!(q.is_full());
    assert_eq!(q.len(), CAP);
    assert_eq!(q.push(CAP), Err(CAP));
    assert_eq!(q.len(), CAP);

    for i in 0..CAP {
        let len = q.len();
        assert_eq!(q.pop(), Some(i));
        assert_eq!(q.len(), len - 1);
    }
    assert!(q.is_empty());
    assert_eq!(q.pop(), None);
}

#[test]
fn wrap_around() {
    let mut q = Queue::<i32, 3>::new();
    for round in 0..10 {
        assert_eq!(q.push(round), Ok(()));
        assert_eq!(q.push(round + 100), Ok(()));
        assert_eq!(q.pop(), Some(round));
        assert_eq!(q.pop(), Some(round + 100));
        assert!(q.read_index() <= q.capacity().get());
        assert!(q.write_index() <= q.capacity().get());
    }
    assert!(q.is_empty());
}

#[test]
fn pop_into() {
    let mut q = Queue::<i32, 2>::new();
    let mut x = -1;

    assert!(!q.pop_into(&mut x));
    assert_eq!(x, -1);

    q.push(5).unwrap();
    assert!(q.pop_into(&mut x));
    assert_eq!(x, 5);
}

#[test]
fn clear() {
    let mut q = Queue::<i32, 4>::new();
    assert_eq!(q.clear(), 0);
    assert!(q.is_empty());

    q.push(1).unwrap();
    q.push(2).unwrap();
    q.push(3).unwrap();
    q.pop().unwrap();
    assert_eq!(q.clear(), 2);
    assert!(q.is_empty());
    assert_eq!(indices(&q), (3, 3));

    for i in 0..4 {
        q.push(i).unwrap();
    }
    assert!(q.is_full());
    assert_eq!(q.clear(), 4);
    assert!(q.is_empty());

    q.push(7).unwrap();
    assert_eq!(q.pop(), Some(7));
}

#[test]
fn clear_by_consumer() {
    let mut q = Queue::<i32, 3>::new();
    let (mut prod, mut cons) = q.split_ref();

    prod.push(1).unwrap();
    prod.push(2).unwrap();
    assert_eq!(cons.clear(), 2);
    assert!(prod.is_empty());
    assert_eq!(prod.vacant_len(), 3);
}

#[test]
fn cons_iter() {
    let mut q = Queue::<i32, 4>::new();
    let (mut prod, mut cons) = q.split_ref();

    prod.push(1).unwrap();
    prod.push(2).unwrap();
    assert_eq!(cons.next(), Some(1));
    prod.push(3).unwrap();
    assert!(cons.by_ref().eq([2, 3]));
    assert_eq!(cons.next(), None);
}

#[cfg(feature = "alloc")]
#[test]
fn debug() {
    use alloc::format;

    let mut q = Queue::<i32, 2>::new();
    q.push(1).unwrap();
    let s = format!("{:?}", q);
    assert!(s.contains("capacity: 2"));
    assert!(s.contains("len: 1"));
}
