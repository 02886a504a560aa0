//! Fixed-capacity lock-free single-producer single-consumer queue.
//!
//! The queue is a ring buffer with a pair of atomic cursors. It never allocates after construction
//! and never locks, so it suits latency-sensitive pipelines where exactly one thread pushes
//! and exactly one thread pops.
//!
//! What happens on a push into a full queue is selected by a [`WritePolicy`] type parameter:
//! [`NoOverwrite`] rejects the item, [`Overwrite`] evicts the oldest one.
//!
//! # Usage
//!
//! The queue itself implements both [`Producer`](traits::Producer) and [`Consumer`](traits::Consumer).
//! To use it from two threads split it into [`Prod`] and [`Cons`] halves.
//!
#![cfg_attr(
    feature = "alloc",
    doc = r##"
```
use lockfree_queue::{traits::*, HeapQueue};

let q = HeapQueue::<i32>::new(2);
let (mut prod, mut cons) = q.split();

prod.push(0).unwrap();
prod.push(1).unwrap();
assert_eq!(prod.push(2), Err(2));

assert_eq!(cons.pop(), Some(0));

prod.push(2).unwrap();

assert_eq!(cons.pop(), Some(1));
assert_eq!(cons.pop(), Some(2));
assert_eq!(cons.pop(), None);
```
"##
)]
//!
//! # Features
//!
//! + `std` (default): timeout-bounded waits, implies `alloc`.
//! + `alloc`: heap-allocated storage and `Arc`-based splitting.
//! + `portable-atomic`: atomics from [`portable-atomic`](https://docs.rs/portable-atomic) for targets without native ones.
#![no_std]
#![allow(clippy::type_complexity)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod alias;
pub mod halves;
pub mod policy;
pub mod queue;
pub mod raw;
pub mod storage;
pub mod traits;
mod utils;
#[cfg(feature = "std")]
mod wait;

#[cfg(test)]
mod tests;

pub use alias::*;
pub use halves::{Cons, Prod};
pub use policy::{NoOverwrite, Overwrite, WritePolicy};
pub use queue::Queue;
