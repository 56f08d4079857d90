use std::fmt::{self, Debug};

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}
}

/// Runtime mirror of a cursor [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tag {
    /// Random access through the host's indexing operation.
    Ordinary,
    /// Random access over elements stored in one adjacent block.
    Contiguous,
}

impl Tag {
    pub const fn is_contiguous(self) -> bool {
        matches!(self, Self::Contiguous)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tag::Ordinary => write!(f, "ordinary"),
            Tag::Contiguous => write!(f, "contiguous"),
        }
    }
}

/// Compile-time capability level of a cursor.
///
/// Sealed: the only categories are [`Ordinary`] and, when the `contiguous`
/// feature is enabled, [`Contiguous`].
pub trait Category: sealed::Sealed + Debug + Default + Clone + Copy + Eq + 'static {
    const TAG: Tag;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ordinary;

impl sealed::Sealed for Ordinary {}

impl Category for Ordinary {
    const TAG: Tag = Tag::Ordinary;
}

#[cfg(contiguous_cursors)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contiguous;

#[cfg(contiguous_cursors)]
impl sealed::Sealed for Contiguous {}

#[cfg(contiguous_cursors)]
impl Category for Contiguous {
    const TAG: Tag = Tag::Contiguous;
}

/// Category used by the built-in slice-backed hosts.
#[cfg(contiguous_cursors)]
pub(crate) type Native = Contiguous;
#[cfg(not(contiguous_cursors))]
pub(crate) type Native = Ordinary;
