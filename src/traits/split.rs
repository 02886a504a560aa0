use crate::traits::{Consumer, Producer};

/// Consumes the queue turning it into owned producer and consumer halves.
///
/// The halves share the queue and can be moved to different threads.
/// Only queues that never move the read cursor on push can be split.
pub trait Split {
    /// Producer type.
    type Prod: Producer;
    /// Consumer type.
    type Cons: Consumer;

    /// Perform splitting.
    fn split(self) -> (Self::Prod, Self::Cons);
}

/// Borrows the queue as producer and consumer halves.
///
/// The queue stays in place (e.g. in a `static` or on the stack) and is locked by the borrow
/// until both halves are dropped.
pub trait SplitRef {
    /// Ref producer type.
    type RefProd<'a>: Producer + 'a
    where
        Self: 'a;
    /// Ref consumer type.
    type RefCons<'a>: Consumer + 'a
    where
        Self: 'a;

    /// Perform splitting by reference.
    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>);
}
