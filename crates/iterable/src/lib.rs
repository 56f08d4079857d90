#![doc = include_str!("../README.md")]
#![doc = "\n## Example\n"]
#![doc = "\n```rust"]
#![doc = include_str!("../examples/hosts.rs")]
#![doc = "```"]

#[cfg(feature = "derive")]
pub use iterable_derive::Iterable;

mod category;
mod cursor;
mod error;
mod hosts;
mod iterators;
mod strategy;
mod traits;

pub use category::*;
pub use cursor::*;
pub use error::*;
pub use iterators::*;
pub use strategy::*;
pub use traits::*;
