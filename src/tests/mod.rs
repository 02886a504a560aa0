use crate::StaticQueue as Queue;

mod basic;
mod overwrite;
