mod indexed;
mod iterable;
mod random_access;
mod storage;

pub use indexed::*;
pub use iterable::*;
pub use random_access::*;
pub use storage::*;
