pub mod consumer;
pub mod observer;
pub mod producer;
mod split;
mod utils;

pub use consumer::Consumer;
pub use observer::Observer;
pub use producer::Producer;
pub use split::{Split, SplitRef};
