use core::fmt;
use core::num::NonZeroU32;

use crate::error::{HnError, HnResult};

/// Dense, zero-based index into a network's node or element arrays.
///
/// - `u32` keeps adjacency lists small
/// - `NonZero` enables `Option<Idx>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Idx(NonZeroU32);

impl Idx {
    /// Largest index that can be stored.
    pub const MAX_INDEX: usize = (u32::MAX - 1) as usize;

    /// Create an index, storing index+1.
    ///
    /// # Panics
    ///
    /// Panics if `index > Idx::MAX_INDEX`. Networks are orders of magnitude
    /// smaller than that, so callers building from in-memory lists use this.
    pub fn from_index(index: usize) -> Self {
        match Self::try_from_index(index) {
            Ok(idx) => idx,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible variant of [`Idx::from_index`].
    pub fn try_from_index(index: usize) -> HnResult<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(HnError::InvalidArg {
                what: "index exceeds the u32 index space",
            })
    }

    /// Recover the 0-based index.
    #[inline]
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Idx({})", self.index())
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Domain-specific index aliases for clarity (no runtime cost).
pub type NodeIdx = Idx;
pub type ElemIdx = Idx;

/// Identifier of a connection point in the caller's data model.
pub type ExternalId = u32;

/// Identifier of a flow element in the caller's data model (diagnostics only).
pub type ElementId = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_round_trip_index() {
        for i in [0_usize, 1, 2, 42, 10_000] {
            let idx = Idx::from_index(i);
            assert_eq!(idx.index(), i);
        }
    }

    #[test]
    fn option_idx_is_small() {
        assert_eq!(
            core::mem::size_of::<Idx>(),
            core::mem::size_of::<Option<Idx>>()
        );
    }

    #[test]
    fn idx_rejects_out_of_range() {
        assert!(Idx::try_from_index(Idx::MAX_INDEX).is_ok());
        let err = Idx::try_from_index(Idx::MAX_INDEX + 1).unwrap_err();
        assert!(matches!(err, HnError::InvalidArg { .. }));
    }

    #[test]
    fn idx_display_is_zero_based() {
        let idx = Idx::from_index(7);
        assert_eq!(format!("{idx}"), "7");
        assert_eq!(format!("{idx:?}"), "Idx(7)");
    }

    #[test]
    fn idx_orders_by_index() {
        assert!(Idx::from_index(1) < Idx::from_index(2));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn index_survives_round_trip(i in 0_usize..=Idx::MAX_INDEX) {
            prop_assert_eq!(Idx::from_index(i).index(), i);
        }
    }
}
