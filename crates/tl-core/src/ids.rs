//! Junction identifier.

use std::fmt;

/// Index of a junction in the graph store.
///
/// Assigned sequentially from 0 in insertion order and stable until the
/// graph is rebuilt.  The inner integer is `pub` so per-junction `Vec`s can
/// be indexed directly; [`JunctionId::index`] reads better at call sites.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JunctionId(pub u32);

impl JunctionId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Prints the bare index, matching the snapshot and menu formats.
impl fmt::Display for JunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for JunctionId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<JunctionId, Self::Error> {
        u32::try_from(n).map(JunctionId)
    }
}
