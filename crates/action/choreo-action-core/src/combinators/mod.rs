//! Combinators: actions built from child actions.
//!
//! Each combinator owns its children outright; cloning a combinator
//! deep-copies its subtree.

pub mod repeat;
pub mod reverse_time;
pub mod sequence;
pub mod spawn;

pub use repeat::Repeat;
pub use reverse_time::ReverseTime;
pub use sequence::{sequence, Sequence};
pub use spawn::{spawn, Spawn};
