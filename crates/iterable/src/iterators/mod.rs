mod range;
mod wrapper;

pub use range::*;
pub use wrapper::*;
